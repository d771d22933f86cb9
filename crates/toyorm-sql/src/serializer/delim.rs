use super::{Formatter, Params, ToSql};

use toyorm_core::Result;

/// Comma delimited, without padding
pub(super) struct Comma<L>(pub(super) L);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ",";
        }
        Ok(())
    }
}
