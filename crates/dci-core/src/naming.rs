//! Conversión de identificadores `CamelCase` → `snake_case`.
//!
//! Se usa únicamente cuando una declaración de rol omite el nombre: el tipo
//! `MoneySource` queda enlazado como `money_source`. Para tipos anidados
//! (`Person::Minister`) sólo cuenta el último segmento.

/// Convierte un identificador de tipo en un nombre de rol.
///
/// Función pura y total: cualquier `&str` produce un resultado. Reglas:
/// - se descarta el prefijo de ruta hasta el último `::`;
/// - se inserta `_` antes de una mayúscula precedida por minúscula o dígito;
/// - en una racha de mayúsculas se separa la última si inicia una palabra
///   (`HTTPSource` → `http_source`);
/// - `-` se convierte en `_`.
pub fn underscore(identifier: &str) -> String {
    let ident = identifier.rsplit("::").next().unwrap_or(identifier);
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            out.push('_');
            continue;
        }
        if !c.is_uppercase() {
            out.push(c);
            continue;
        }
        if i > 0 {
            let prev = chars[i - 1];
            let starts_word = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && starts_word) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}
