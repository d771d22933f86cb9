use super::{Params, ToSql};

use toyorm_core::{stmt, Result};

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
        Ok(())
    }
}
