/// Unwrap `[label|target]` link markup down to the text after the `|`.
///
/// Works on the first `[`, `|` and `]` of the text each round and stops as soon as
/// any of them is missing or they are not in `[`, `|`, `]` order.
pub fn unwrap_link_markup(text: &str) -> String {
    let mut text = text.to_string();
    loop {
        let (Some(left), Some(pipe), Some(right)) = (text.find('['), text.find('|'), text.find(']'))
        else {
            break;
        };
        if !(left < pipe && pipe < right) {
            break;
        }
        text = format!("{}{}{}", &text[..left], &text[pipe + 1..right], &text[right + 1..]);
    }
    text
}
