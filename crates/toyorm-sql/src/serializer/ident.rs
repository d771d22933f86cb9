use super::{Formatter, Params, ToSql};

use toyorm_core::Result;

/// A backtick quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push('`');

        for ch in self.0.as_ref().chars() {
            if ch == '`' {
                f.dst.push('`');
            }
            f.dst.push(ch);
        }

        f.dst.push('`');
        Ok(())
    }
}
