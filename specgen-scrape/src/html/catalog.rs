//! Static HTML catalog
//!
//! Attribute tables are not scraped: the reference lists them in tables that are painful to
//! parse, so they are curated here in the order the reference presents them. Every call builds
//! fresh values, so no two elements ever share an attribute instance.

use specgen_schema::Attribute;

/// Elements that never have children
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Non-void elements whose content model excludes text
pub const TEXTLESS_ELEMENTS: &[&str] = &[
    "picture", "source", "img", "iframe", "embed", "object", "video", "audio", "track", "map",
    "area", "table", "thead", "tbody", "tfoot", "tr", "head", "ul", "ol", "menu", "select",
    "optgroup", "dl", "ruby", "details", "fieldset", "form", "html",
];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub fn is_textless(tag: &str) -> bool {
    TEXTLESS_ELEMENTS.contains(&tag)
}

/// The element specific attribute table for `tag`, if one is curated
pub fn element_attributes(tag: &str) -> Option<Vec<Attribute>> {
    let attributes = match tag {
        "base" => base_attributes(),
        "link" => link_attributes(),
        "meta" => meta_attributes(),
        "style" => style_attributes(),
        "body" => body_attributes(),
        "blockquote" => blockquote_attributes(),
        "ol" => ol_attributes(),
        "li" => li_attributes(),
        "a" => a_attributes(),
        "q" => q_attributes(),
        "data" => data_attributes(),
        "time" => time_attributes(),
        "ins" => ins_del_attributes(),
        "del" => ins_del_attributes(),
        "source" => source_attributes(),
        "img" => img_attributes(),
        "iframe" => iframe_attributes(),
        "embed" => embed_attributes(),
        "object" => object_attributes(),
        "video" => video_attributes(),
        "audio" => audio_attributes(),
        "track" => track_attributes(),
        "map" => map_attributes(),
        "area" => area_attributes(),
        "colgroup" => colgroup_attributes(),
        "col" => col_attributes(),
        "td" => td_attributes(),
        "th" => th_attributes(),
        "form" => form_attributes(),
        "label" => label_attributes(),
        "input" => input_attributes(),
        "button" => button_attributes(),
        "select" => select_attributes(),
        "optgroup" => optgroup_attributes(),
        "option" => option_attributes(),
        "textarea" => textarea_attributes(),
        "output" => output_attributes(),
        "progress" => progress_attributes(),
        "meter" => meter_attributes(),
        "fieldset" => fieldset_attributes(),
        "details" => details_attributes(),
        "dialog" => dialog_attributes(),
        "script" => script_attributes(),
        "template" => template_attributes(),
        "slot" => slot_attributes(),
        "canvas" => canvas_attributes(),
        _ => return None,
    };
    Some(attributes)
}

/// Attributes every HTML element accepts, in reference order
pub fn global_attributes() -> Vec<Attribute> {
    vec![
        Attribute::char(
            "accesskey",
            "The accesskey attribute's value is used by the user agent as a guide for creating a keyboard shortcut that activates or focuses the element.",
        ),
        Attribute::prefixed_custom(
            "aria",
            "The aria attribute is a custom attribute whose name starts with the string \"aria-\", has at least one character after the hyphen, is a valid attribute local name, and contains no ASCII upper alphas.",
        ),
        Attribute::enumerated(
            "autocapitalize",
            "The autocapitalize attribute is an enumerated attribute whose states are the possible autocapitalization hints. The autocapitalization hint specified by the attribute's state combines with other considerations to form the used autocapitalization hint, which informs the behavior of the user agent.",
            ["off", "none", "on", "sentences", "words", "characters"],
        ),
        Attribute::enumerated(
            "autocorrect",
            "The autocorrect attribute can be used on an editing host to control autocorrection behavior for the hosted editable region, on an input or textarea element to control the behavior when inserting text into that element, or on a form element to control the default behavior for all autocapitalize-and-autocorrect inheriting elements associated with the form element.",
            ["on", "off"],
        )
        .allow_empty(),
        Attribute::boolean(
            "autofocus",
            "The autofocus content attribute allows the author to indicate that an element is to be focused as soon as the page is loaded, allowing the user to just start typing without having to manually focus the main element.",
        ),
        Attribute::token_set(
            "class",
            "When specified on HTML elements, the class attribute must have a value that is a set of space-separated tokens representing the various classes that the element belongs to.",
        ),
        Attribute::enumerated(
            "contenteditable",
            "",
            ["true", "false", "plaintext-only"],
        )
        .allow_empty(),
        Attribute::prefixed_custom(
            "data",
            "A custom data attribute is an attribute in no namespace whose name starts with the string \"data-\", has at least one character after the hyphen, is a valid attribute local name, and contains no ASCII upper alphas.",
        ),
        Attribute::enumerated("dir", "", ["ltr", "rtl", "auto"]),
        Attribute::enumerated(
            "draggable",
            "All HTML elements may have the draggable content attribute set.",
            ["true", "false"],
        ),
        Attribute::enumerated(
            "enterkeyhint",
            "The enterkeyhint content attribute is an enumerated attribute that specifies what action label (or icon) to present for the enter key on virtual keyboards. This allows authors to customize the presentation of the enter key in order to make it more helpful for users.",
            ["enter", "done", "go", "next", "previous", "search", "send"],
        ),
        Attribute::enumerated(
            "hidden",
            "All HTML elements may have the hidden content attribute set.",
            ["hidden", "until-found"],
        )
        .allow_empty(),
        Attribute::text("id", "The id attribute specifies its element's unique identifier (ID)."),
        Attribute::boolean(
            "inert",
            "The inert attribute is a boolean attribute that indicates, by its presence, that the element and all its flat tree descendants which don't otherwise escape inertness (such as modal dialogs) are to be made inert by the user agent.",
        ),
        Attribute::enumerated(
            "inputmode",
            "User agents can support the inputmode attribute on form controls (such as the value of textarea elements), or in elements in an editing host (e.g., using contenteditable).",
            ["none", "text", "tel", "url", "email", "numeric", "decimal", "search"],
        ),
        Attribute::text(
            "itemid",
            "The itemid attribute, if specified, must have a value that is a valid URL potentially surrounded by spaces.",
        ),
        Attribute::token_set(
            "itemprop",
            "The itemprop attribute, if specified, must have a value that is an unordered set of unique space-separated tokens none of which are identical to another token, representing the names of the name-value pairs that it adds. The attribute's value must have at least one token.",
        ),
        Attribute::token_set(
            "itemref",
            "The itemref attribute, if specified, must have a value that is an unordered set of unique space-separated tokens none of which are identical to another token and consisting of IDs of elements in the same tree.",
        ),
        Attribute::boolean(
            "itemscope",
            "Every HTML element may have an itemscope attribute specified. The itemscope attribute is a boolean attribute.",
        ),
        Attribute::token_set(
            "itemtype",
            "The itemtype attribute, if specified, must have a value that is an unordered set of unique space-separated tokens, none of which are identical to another token and each of which is a valid URL string that is an absolute URL, and all of which are defined to use the same vocabulary. The attribute's value must have at least one token.",
        ),
        Attribute::text(
            "lang",
            "The lang attribute (in no namespace) specifies the primary language for the element's contents and for any of the element's attributes that contain text. Its value must be a valid BCP 47 language tag, or the empty string. Setting the attribute to the empty string indicates that the primary language is unknown.",
        ),
        Attribute::text(
            "nonce",
            "A nonce content attribute represents a cryptographic nonce (\"number used once\") which can be used by Content Security Policy to determine whether or not a given fetch will be allowed to proceed. The value is text.",
        ),
        Attribute::text(
            "popover",
            "All HTML elements may have the popover content attribute set. When specified, the element won't be rendered until it becomes shown, at which point it will be rendered on top of other page content.",
        ),
        Attribute::text(
            "role",
            "The role attribute, if specified, must have a value that is a valid BCP 47 language tag, or the empty string. The attribute's value must conform to the ARIA in HTML specification.",
        ),
        Attribute::text(
            "slot",
            "The slot attribute is used to assign a slot to an element: an element with a slot attribute is assigned to the slot created by the slot element whose name attribute's value matches that slot attribute's value — but only if that slot element finds itself in the shadow tree whose root's host has the corresponding slot attribute value.",
        ),
        Attribute::enumerated(
            "spellcheck",
            "User agents can support the checking of spelling and grammar of editable text, either in form controls (such as the value of textarea elements), or in elements in an editing host (e.g. using contenteditable).",
            ["true", "false"],
        )
        .allow_empty(),
        Attribute::text(
            "style",
            "All HTML elements may have the style content attribute set. This is a style attribute as defined by CSS Style Attributes.",
        ),
        Attribute::integer(
            "tabindex",
            "The tabindex attribute, if specified, must have a value that is a valid integer. Positive numbers specify the relative position of the element's focusable areas in the sequential focus navigation order, and negative numbers indicate that the control is not sequentially focusable.",
        ),
        Attribute::text(
            "title",
            "The title attribute represents advisory information for the element, such as would be appropriate for a tooltip. On a link, this could be the title or a description of the target resource; on an image, it could be the image credit or a description of the image; on a paragraph, it could be a footnote or commentary on the text; on a citation, it could be further information about the source; on interactive content, it could be a label for, or instructions for, use of the element; and so forth. The value is text.",
        ),
        Attribute::enumerated(
            "translate",
            "The translate attribute is used to specify whether an element's attribute values and the values of its Text node children are to be translated when the page is localized, or whether to leave them unchanged.",
            ["yes", "no"],
        )
        .allow_empty(),
        Attribute::enumerated(
            "writingsuggestions",
            "User agents offer writing suggestions as users type into editable regions, either in form controls (e.g., the textarea element) or in elements in an editing host.",
            ["true", "false"],
        )
        .allow_empty(),
    ]
}

// Attributes shared by several element tables

fn fetch_priority() -> Attribute {
    Attribute::enumerated(
        "fetchpriority",
        "Sets the priority for fetches initiated by the element",
        ["high", "low", "auto"],
    )
}

fn referrer_policy() -> Attribute {
    Attribute::text("referrerpolicy", "Referrer policy for fetches initiated by the element")
}

fn width() -> Attribute {
    Attribute::integer("width", "Horizontal dimension")
}

fn height() -> Attribute {
    Attribute::integer("height", "Vertical dimension")
}

fn loading() -> Attribute {
    Attribute::enumerated("loading", "Used when determining loading deferral", ["lazy", "eager"])
}

fn src() -> Attribute {
    Attribute::text("src", "Address of the resource")
}

fn resource_type() -> Attribute {
    Attribute::text("type", "Type of embedded resource")
}

fn crossorigin() -> Attribute {
    Attribute::enumerated(
        "crossorigin",
        "How the element handles crossorigin requests",
        ["anonymous", "use-credentials"],
    )
    .allow_empty()
}

fn href() -> Attribute {
    Attribute::text("href", "Address of the hyperlink")
}

fn span() -> Attribute {
    Attribute::integer(
        "span",
        "Number of columns spanned by the element where the number is > 0 && <= 1000",
    )
}

fn rowspan() -> Attribute {
    Attribute::integer(
        "rowspan",
        "Number of rows that the cell is to span where the number is > 0 && <= 65534",
    )
}

fn headers() -> Attribute {
    Attribute::token_set("headers", "The header cells for this cell")
}

fn base_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("href", "Document base URL"),
        Attribute::text("target", "Default navigable for hyperlink navigation and form submission"),
    ]
}

fn link_attributes() -> Vec<Attribute> {
    vec![
        href(),
        crossorigin(),
        Attribute::token_set(
            "rel",
            "Relationship between the document containing the hyperlink and the destination resource",
        ),
        Attribute::text("media", "Applicable media"),
        Attribute::text(
            "integrity",
            "Integrity metadata used in Subresource Integrity checks [SRI]",
        ),
        Attribute::text("hreflang", "Language of the linked resource"),
        Attribute::text("type", "Hint for the type of the referenced resource"),
        referrer_policy(),
        Attribute::token_set("sizes", "Sizes of the icons (for rel=\"icon\")"),
        Attribute::text(
            "imagesrcset",
            "Images to use in different situations, e.g., high-resolution displays, small monitors, etc. (for rel=\"preload\")",
        ),
        Attribute::text(
            "imagesizes",
            "Image sizes for different page layouts (for rel=\"preload\")",
        ),
        Attribute::text(
            "as",
            "Potential destination for a preload request (for rel=\"preload\" and rel=\"modulepreload\")",
        ),
        Attribute::enumerated(
            "blocking",
            "Whether the element is potentially render-blocking",
            ["render"],
        ),
        Attribute::text(
            "color",
            "Color to use when customizing a site's icon (for rel=\"mask-icon\")",
        ),
        Attribute::boolean("disabled", "Whether the link is disabled"),
        fetch_priority(),
    ]
}

fn meta_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("name", "Metadata name"),
        Attribute::enumerated(
            "http-equiv",
            "Pragma directive",
            [
                "content-language",
                "content-type",
                "default-style",
                "refresh",
                "set-cookie",
                "x-ua-compatible",
                "content-security-policy",
            ],
        ),
        Attribute::text("content", "Value of the element"),
        Attribute::text("charset", "Character encoding declaration"),
        Attribute::text("media", "Applicable media"),
    ]
}

fn style_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("media", "Applicable media"),
        Attribute::text("blocking", "Whether the element is potentially render-blocking"),
    ]
}

fn body_attributes() -> Vec<Attribute> {
    [
        "onafterprint",
        "onbeforeprint",
        "onbeforeunload",
        "onhashchange",
        "onlanguagechange",
        "onmessage",
        "onmessageerror",
        "onoffline",
        "ononline",
        "onpageswap",
        "onpagehide",
        "onpagereveal",
        "onpageshow",
        "onpopstate",
        "onrejectionhandled",
        "onstorage",
        "onunhandledrejection",
        "onunload",
    ]
    .into_iter()
    .map(|handler| Attribute::text(handler, ""))
    .collect()
}

fn blockquote_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text(
            "cite",
            "Content inside a blockquote must be quoted from another source, whose address, if it has one, may be cited in the cite attribute.",
        ),
    ]
}

fn ol_attributes() -> Vec<Attribute> {
    vec![
        Attribute::boolean("reversed", "Number the list backwards"),
        Attribute::integer(
            "start",
            "The start attribute, if present, must be a valid integer. It is used to determine the starting value of the list.",
        ),
        Attribute::char(
            "type",
            "The type attribute can be used to specify the kind of marker to use in the list, in the cases where that matters (e.g. because items are to be referenced by their number/letter).",
        ),
    ]
}

fn li_attributes() -> Vec<Attribute> {
    vec![
        Attribute::integer(
            "value",
            "If the element is not a child of an ul or menu element: value — Ordinal value of the list item",
        ),
    ]
}

fn a_attributes() -> Vec<Attribute> {
    vec![
        href(),
        Attribute::text("target", "Navigable for hyperlink navigation"),
        Attribute::boolean(
            "download",
            "Whether to download the resource instead of navigating to it, and its filename if so",
        ),
        Attribute::token_set("ping", "URLs to ping"),
        Attribute::token_set(
            "rel",
            "Relationship between the location in the document containing the hyperlink and the destination resource",
        ),
        Attribute::text("hreflang", "Language of the linked resource"),
        Attribute::text("type", "Hint for the type of the referenced resource"),
        referrer_policy(),
    ]
}

fn q_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text(
            "cite",
            "Link to the source of the quotation or more information about the edit",
        ),
    ]
}

fn data_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("value", "Machine-readable value"),
    ]
}

fn time_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("datetime", "Machine-readable value"),
    ]
}

fn ins_del_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text(
            "cite",
            "Link to the source of the quotation or more information about the edit",
        ),
        Attribute::text("datetime", "Date and (optionally) time of the change"),
    ]
}

fn source_attributes() -> Vec<Attribute> {
    vec![
        resource_type(),
        Attribute::text("media", "Applicable media"),
        src(),
        Attribute::text(
            "srcset",
            "Images to use in different situations, e.g., high-resolution displays, small monitors, etc.",
        ),
        Attribute::text("sizes", "Image sizes for different page layouts"),
        width(),
        height(),
    ]
}

fn img_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("alt", "Replacement text for use when images are not available"),
        src(),
        Attribute::text(
            "srcset",
            "Images to use in different situations, e.g., high-resolution displays, small monitors, etc.",
        ),
        Attribute::text("sizes", "Image sizes for different page layouts"),
        crossorigin(),
        Attribute::text("usemap", "Name of image map to use"),
        Attribute::boolean("ismap", "Whether the image is a server-side image map"),
        width(),
        height(),
        referrer_policy(),
        Attribute::enumerated(
            "decoding",
            "Decoding hint to use when processing this image for presentation",
            ["sync", "async", "auto"],
        ),
        loading(),
        fetch_priority(),
    ]
}

fn iframe_attributes() -> Vec<Attribute> {
    vec![
        src(),
        Attribute::text("srcdoc", "A document to render in the iframe"),
        Attribute::text("name", "Name of content navigable"),
        Attribute::token_set("sandbox", "Security rules for nested content"),
        Attribute::text("allow", "Permissions policy to be applied to the iframe's contents"),
        Attribute::boolean(
            "allowfullscreen",
            "Whether to allow the iframe's contents to use requestFullscreen()",
        ),
        width(),
        height(),
        referrer_policy(),
        loading(),
    ]
}

fn embed_attributes() -> Vec<Attribute> {
    vec![
        src(),
        resource_type(),
        width(),
        height(),
    ]
}

fn object_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("data", "Address of the resource"),
        resource_type(),
        Attribute::text("name", "Name of content navigable"),
        Attribute::text("form", "Associates the element with a form element"),
        width(),
        height(),
    ]
}

fn video_attributes() -> Vec<Attribute> {
    vec![
        src(),
        crossorigin(),
        Attribute::text("poster", "Poster frame to show prior to video playback"),
        Attribute::enumerated(
            "preload",
            "Hints how much buffering the media resource will likely need",
            ["auto", "none", "metadata"],
        )
        .allow_empty(),
        Attribute::boolean(
            "autoplay",
            "Hint that the media resource can be started automatically when the page is loaded",
        ),
        Attribute::boolean(
            "playsinline",
            "Encourage the user agent to display video content within the element's playback area",
        ),
        Attribute::boolean("loop", "Whether to loop the media resource"),
        Attribute::boolean("muted", "Whether to mute the media resource by default"),
        Attribute::boolean("controls", "Show user agent controls"),
        width(),
        height(),
    ]
}

fn audio_attributes() -> Vec<Attribute> {
    vec![
        src(),
        crossorigin(),
        Attribute::enumerated(
            "preload",
            "Hints how much buffering the media resource will likely need",
            ["auto", "none", "metadata"],
        )
        .allow_empty(),
        Attribute::boolean(
            "autoplay",
            "Hint that the media resource can be started automatically when the page is loaded",
        ),
        Attribute::boolean(
            "playsinline",
            "Encourage the user agent to display video content within the element's playback area",
        ),
        Attribute::boolean("loop", "Whether to loop the media resource"),
        Attribute::boolean("muted", "Whether to mute the media resource by default"),
        Attribute::boolean("controls", "Show user agent controls"),
    ]
}

fn track_attributes() -> Vec<Attribute> {
    vec![
        Attribute::enumerated(
            "kind",
            "The type of text track",
            ["subtitles", "captions", "descriptions", "chapters", "metadata"],
        ),
        src(),
        Attribute::text("srclang", "Language of the text track"),
        Attribute::text("label", "User-visible label"),
        Attribute::boolean("default", "Enable the track if no other text track is more suitable"),
    ]
}

fn map_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("name", "Name of image map to reference from the usemap attribute"),
    ]
}

fn area_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("alt", "Replacement text for use when images are not available"),
        Attribute::text("coords", "Coordinates for the shape to be created in an image map"),
        Attribute::enumerated(
            "shape",
            "The kind of shape to be created in an image map",
            ["circle", "default", "poly", "rect"],
        ),
        href(),
        Attribute::text("target", "Navigable for hyperlink navigation"),
        Attribute::boolean(
            "download",
            "Whether to download the resource instead of navigating to it, and its filename if so",
        ),
        Attribute::token_set("ping", "URLs to ping"),
        Attribute::token_set(
            "rel",
            "Relationship between the location in the document containing the hyperlink and the destination resource",
        ),
        referrer_policy(),
    ]
}

fn colgroup_attributes() -> Vec<Attribute> {
    vec![
        span(),
    ]
}

fn col_attributes() -> Vec<Attribute> {
    vec![
        span(),
    ]
}

fn td_attributes() -> Vec<Attribute> {
    vec![
        span(),
        rowspan(),
        headers(),
    ]
}

fn th_attributes() -> Vec<Attribute> {
    vec![
        span(),
        rowspan(),
        headers(),
        Attribute::text("scope", "Specifies which cells the header cell applies to"),
        Attribute::text(
            "abbr",
            "Alternative label to use for the header cell when referencing the cell in other contexts",
        ),
    ]
}

fn form_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("accept-charset", "Character encodings to use for form submission"),
        Attribute::text("action", "URL to use for form submission"),
        Attribute::enumerated(
            "autocomplete",
            "Default setting for autofill feature for controls in the form",
            ["on", "off"],
        ),
        Attribute::text("enctype", "Entry list encoding type to use for form submission"),
        Attribute::enumerated(
            "method",
            "Variant to use for form submission",
            ["get", "post", "dialog"],
        ),
        Attribute::text("name", "Name of form to use in the document.forms API"),
        Attribute::boolean("novalidate", "Bypass form control validation for form submission"),
        Attribute::text("target", "Navigable for form submission"),
        Attribute::token_set(
            "rel",
            "The rel attribute on form elements controls what kinds of links the elements create.",
        ),
    ]
}

fn label_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("for", "Associate the label with form control"),
    ]
}

fn input_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("accept", "Hint for expected file type in file upload controls"),
        Attribute::boolean("alpha", "Allow the color's alpha component to be set"),
        Attribute::text("alt", "Replacement text for use when images are not available"),
        Attribute::token_set("autocomplete", "Hint for form autofill feature"),
        Attribute::boolean("checked", "Hint for form autofill feature"),
        Attribute::enumerated(
            "colorspace",
            "The color space of the serialized color",
            ["limited-srgb", "display-p3"],
        ),
        Attribute::text(
            "dirname",
            "Name of form control to use for sending the element's directionality in form submission",
        ),
        Attribute::boolean("disabled", "Whether the form control is disabled"),
        Attribute::text("form", "Associates the element with a form element"),
        Attribute::text("formaction", "URL to use for form submission"),
        Attribute::text("formenctype", "Entry list encoding type to use for form submission"),
        Attribute::enumerated(
            "formmethod",
            "Variant to use for form submission",
            ["get", "post", "dialog"],
        ),
        Attribute::boolean("formnovalidate", "Bypass form control validation for form submission"),
        Attribute::text("formtarget", "Navigable for form submission"),
        height(),
        Attribute::text("list", "List of autocomplete options"),
        Attribute::integer("max", "Maximum value"),
        Attribute::integer("maxlength", "Maximum length of value"),
        Attribute::integer("min", "Minimum value"),
        Attribute::integer("minlength", "Minimum length of value"),
        Attribute::boolean("multiple", "Whether to allow multiple values"),
        Attribute::text(
            "name",
            "Name of the element to use for form submission and in the form.elements API",
        ),
        Attribute::text("pattern", "Pattern to be matched by the form control's value"),
        Attribute::text("placeholder", "User-visible label to be placed within the form control"),
        Attribute::text("popovertarget", "Targets a popover element to toggle, show, or hide"),
        Attribute::enumerated(
            "popovertargetaction",
            "Indicates whether a targeted popover element is to be toggled, shown, or hidden",
            ["toggle", "show", "hide"],
        ),
        Attribute::boolean("readonly", "Whether to allow the value to be edited by the user"),
        Attribute::boolean("required", "Whether the control is required for form submission"),
        Attribute::integer("size", "Size of the control"),
        src(),
        Attribute::text("step", "Granularity to be matched by the form control's value"),
        Attribute::enumerated(
            "type",
            "Type of form control",
            [
                "hidden",
                "text",
                "search",
                "tel",
                "url",
                "email",
                "password",
                "date",
                "month",
                "week",
                "time",
                "datetime-local",
                "number",
                "range",
                "color",
                "checkbox",
                "radio",
                "file",
                "submit",
                "image",
                "reset",
                "button",
            ],
        ),
        Attribute::text("value", "Value of the form control"),
        width(),
    ]
}

fn button_attributes() -> Vec<Attribute> {
    vec![
        Attribute::enumerated(
            "command",
            "Indicates to the targeted element which action to take.",
            [
                "toggle-popover",
                "show-popover",
                "hide-popover",
                "close",
                "request-close",
                "show-modal",
            ],
        )
        .allow_custom(),
        Attribute::text("commandfor", "Targets another element to be invoked."),
        Attribute::boolean("disabled", "Whether the form control is disabled"),
        Attribute::text("form", "Associates the element with a form element"),
        Attribute::text("formaction", "URL to use for form submission"),
        Attribute::text("formenctype", "Entry list encoding type to use for form submission"),
        Attribute::enumerated(
            "formmethod",
            "Variant to use for form submission",
            ["get", "post", "dialog"],
        ),
        Attribute::boolean("formnovalidate", "Bypass form control validation for form submission"),
        Attribute::text("formtarget", "Navigable for form submission"),
        Attribute::text(
            "name",
            "Name of the element to use for form submission and in the form.elements API",
        ),
        Attribute::text("popovertarget", "Targets a popover element to toggle, show, or hide"),
        Attribute::enumerated(
            "popovertargetaction",
            "Indicates whether a targeted popover element is to be toggled, shown, or hidden",
            ["toggle", "show", "hide"],
        ),
        Attribute::enumerated("type", "Type of button", ["submit", "reset", "button"]),
        Attribute::text("value", "Value to be used for form submission"),
    ]
}

fn select_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("autocomplete", "Hint for form autofill feature"),
        Attribute::boolean("disabled", "Whether the form control is disabled"),
        Attribute::text("form", "Associates the element with a form element"),
        Attribute::boolean("multiple", "Whether to allow multiple values"),
        Attribute::text(
            "name",
            "Name of the element to use for form submission and in the form.elements API",
        ),
        Attribute::boolean("required", "Whether the control is required for form submission"),
        Attribute::integer("size", "Size of the control"),
    ]
}

fn optgroup_attributes() -> Vec<Attribute> {
    vec![
        Attribute::boolean("disabled", "Whether the form control is disabled"),
        Attribute::text("label", "User-visible label"),
    ]
}

fn option_attributes() -> Vec<Attribute> {
    vec![
        Attribute::boolean("disabled", "Whether the form control is disabled"),
        Attribute::text("label", "User-visible label"),
        Attribute::boolean("selected", "Whether the option is selected by default"),
        Attribute::text("value", "Value to be used for form submission"),
    ]
}

fn textarea_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("autocomplete", "Hint for form autofill feature"),
        Attribute::integer("cols", "Maximum number of characters per line"),
        Attribute::text(
            "dirname",
            "Name of form control to use for sending the element's directionality in form submission",
        ),
        Attribute::boolean("disabled", "Whether the form control is disabled"),
        Attribute::text("form", "Associates the element with a form element"),
        Attribute::integer("maxlength", "Maximum length of value"),
        Attribute::integer("minlength", "Minimum length of value"),
        Attribute::text(
            "name",
            "Name of the element to use for form submission and in the form.elements API",
        ),
        Attribute::text("placeholder", "User-visible label to be placed within the form control"),
        Attribute::boolean("readonly", "Whether to allow the value to be edited by the user"),
        Attribute::boolean("required", "Whether the control is required for form submission"),
        Attribute::text("rows", "Number of lines to show"),
        Attribute::enumerated(
            "wrap",
            "How the value of the form control is to be wrapped for form submission",
            ["soft", "hard"],
        ),
    ]
}

fn output_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("for", "Specifies controls from which the output was calculated"),
        Attribute::text("form", "Associates the element with a form element"),
        Attribute::text("name", "Name of the element to use in the form.elements API."),
    ]
}

fn progress_attributes() -> Vec<Attribute> {
    vec![
        Attribute::float("value", "Current value of the element"),
        Attribute::float("max", "Upper bound of range"),
    ]
}

fn meter_attributes() -> Vec<Attribute> {
    vec![
        Attribute::float("value", "Current value of the element"),
        Attribute::float("min", "Lower bound of range"),
        Attribute::float("max", "Upper bound of range"),
        Attribute::float("low", "High limit of low range"),
        Attribute::float("high", "Low limit of high range"),
        Attribute::float("optimum", "Optimum value in gauge"),
    ]
}

fn fieldset_attributes() -> Vec<Attribute> {
    vec![
        Attribute::boolean(
            "disabled",
            "Whether the descendant form controls, except any inside legend, are disabled",
        ),
        Attribute::text("form", "Associates the element with a form element"),
        Attribute::text("name", "Name of the element to use in the form.elements API."),
    ]
}

fn details_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("name", "Name of group of mutually-exclusive details elements"),
        Attribute::boolean("open", "Whether the details are visible"),
    ]
}

fn dialog_attributes() -> Vec<Attribute> {
    vec![
        Attribute::enumerated(
            "closedby",
            "Which user actions will close the dialog",
            ["any", "closerequest", "none"],
        ),
        Attribute::boolean("open", "Whether the dialog box is showing"),
    ]
}

fn script_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("type", "Type of script"),
        src(),
        Attribute::boolean(
            "nomodule",
            "Prevents execution in user agents that support module scripts",
        ),
        Attribute::boolean(
            "async",
            "Execute script when available, without blocking while fetching",
        ),
        Attribute::boolean("defer", "Defer script execution"),
        Attribute::enumerated(
            "blocking",
            "Whether the element is potentially render-blocking",
            ["render"],
        ),
        crossorigin(),
        referrer_policy(),
        Attribute::text(
            "integrity",
            "Integrity metadata used in Subresource Integrity checks [SRI]",
        ),
        fetch_priority(),
    ]
}

fn template_attributes() -> Vec<Attribute> {
    vec![
        Attribute::enumerated(
            "shadowrootmode",
            "Enables streaming declarative shadow roots",
            ["open", "closed"],
        ),
        Attribute::boolean(
            "shadowrootdelegatefocus",
            "Sets delegates focus on a declarative shadow root",
        ),
        Attribute::boolean("shadowrootclonable", "Sets clonable on a declarative shadow root"),
        Attribute::boolean(
            "shadowrootserializable",
            "Sets serializable on a declarative shadow root",
        ),
        Attribute::boolean(
            "shadowrootcustomelementregistry",
            "Enables declarative shadow roots to indicate they will use a custom element registry\n",
        ),
    ]
}

fn slot_attributes() -> Vec<Attribute> {
    vec![
        Attribute::text("name", "Name of shadow tree slot"),
    ]
}

fn canvas_attributes() -> Vec<Attribute> {
    vec![
        width(),
        height(),
    ]
}
