//! Roles de una boda tradicional.
//!
//! El ministro no guarda referencias a los novios: los alcanza por nombre
//! (`husband`, `wife`) a través del contexto, y cada novio recibe el nombre
//! del rol de su pareja, no la pareja misma.

use dci_core::{args, role};

role! {
    WifeToBe {
        fn marry(role, partner: String) {
            let husband = role.context()?.get(&partner)?;
            let last_name: String = husband.call("last_name", &[])?;
            role.invoke("set_last_name", &args![last_name])?;
        }
    }
}

role! {
    HusbandToBe {
        fn marry(role, partner: String) {
            // el novio conserva su apellido; sólo valida que la pareja exista
            role.context()?.get(&partner)?;
        }
    }
}

role! {
    Minister {
        fn administer_marriage(role) -> String {
            let ctx = role.context()?;
            ctx.get("husband")?.invoke("marry", &args!["wife"])?;
            ctx.get("wife")?.invoke("marry", &args!["husband"])?;
            let first: String = role.call("first_name", &[])?;
            let last: String = role.call("last_name", &[])?;
            let married: String = ctx.get("wife")?.call("last_name", &[])?;
            format!("I, {first} {last}, now pronounce you Mr. and Mrs. {married}")
        }
    }
}
