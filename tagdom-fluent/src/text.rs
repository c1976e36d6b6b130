/// Substring helpers around a single delimiter.
pub trait AffixExt {
    /// Everything before the first `delim`, or the whole string when absent.
    fn before(&self, delim: char) -> &str;

    /// Everything after the first `delim`, or `""` when absent.
    fn after(&self, delim: char) -> &str;
}

impl AffixExt for str {
    fn before(&self, delim: char) -> &str {
        match self.find(delim) {
            Some(idx) => &self[..idx],
            None => self,
        }
    }

    fn after(&self, delim: char) -> &str {
        match self.find(delim) {
            Some(idx) => &self[idx + delim.len_utf8()..],
            None => "",
        }
    }
}
