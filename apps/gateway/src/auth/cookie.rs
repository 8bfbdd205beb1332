/// Look up a cookie value in a raw `Cookie` header.
///
/// The header is tokenized deterministically: split on `;`, trim each pair,
/// split on the first `=`. If the same key appears more than once, the first
/// occurrence wins.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}
