/// Converts a `CamelCase` identifier to `snake_case`.
///
/// Every uppercase character except the first is prefixed with `_`, and all
/// uppercase characters are lowered. Anything else is copied unchanged, so
/// `FirstName` becomes `first_name`, `Id` becomes `id` and an already snake
/// cased `first_name` is left alone. Runs of capitals are not grouped:
/// `HTTPCode` becomes `h_t_t_p_code`.
pub fn snake_case(src: &str) -> String {
    let mut ret = String::with_capacity(src.len() + 4);

    for (i, ch) in src.chars().enumerate() {
        if ch.is_uppercase() {
            if i != 0 {
                ret.push('_');
            }
            ret.extend(ch.to_lowercase());
        } else {
            ret.push(ch);
        }
    }

    ret
}
