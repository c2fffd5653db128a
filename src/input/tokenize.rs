/// Splits a raw line on whitespace. No quoting, no escapes: `|` only acts as
/// a pipe when it stands alone as a token.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}
