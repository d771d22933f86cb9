use super::{Formatter, Params};

use toyorm_core::Result;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f)?;
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()>;
}

impl ToSql for &str {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl<T: ToSql> ToSql for Option<T> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if let Some(inner) = self {
            inner.to_sql(f)?;
        }

        Ok(())
    }
}
