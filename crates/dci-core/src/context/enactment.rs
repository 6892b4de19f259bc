use log::{debug, warn};

use super::Context;
use crate::errors::DciError;

/// Un caso de uso concreto.
///
/// El constructor del implementador crea su `Context` y declara los roles;
/// `call` ejecuta el algoritmo a través de los accesores de rol. Un valor
/// de este tipo corresponde a una única ejecución.
pub trait Enactment {
    type Output;

    fn context(&self) -> &Context;

    fn call(&self) -> Result<Self::Output, DciError>;
}

/// Ejecuta `enactment.call()` con trazas de inicio/fin.
pub fn enact<E: Enactment>(enactment: &E) -> Result<E::Output, DciError> {
    let ctx = enactment.context();
    debug!("enact:start context={} label={} roles={:?}", ctx.id(), ctx.label(), ctx.role_names());
    let result = enactment.call();
    match &result {
        Ok(_) => debug!("enact:done context={} label={}", ctx.id(), ctx.label()),
        Err(e) => warn!("enact:failed context={} label={} error={e}", ctx.id(), ctx.label()),
    }
    result
}
