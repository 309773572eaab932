//! Type utilities for the derive macros.

/// Returns the bare identifier of a single-segment, non-generic type path.
fn simple_ident(ty: &syn::Type) -> Option<String> {
    let syn::Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() {
        return None;
    }
    if path.path.segments.len() != 1 {
        return None;
    }
    let segment = path.path.segments.first()?;
    if !segment.arguments.is_empty() {
        return None;
    }
    Some(segment.ident.to_string())
}

/// Checks if a type is a recognized scalar primitive.
///
/// Returns `true` for bare primitive type names like `i32`, `bool`, `f64`, etc.
/// Qualified paths, generic types and aliases are not recognized; they are
/// left for the type checker to reject if they are not `Censorable`.
pub(crate) fn is_scalar_type(ty: &syn::Type) -> bool {
    simple_ident(ty).is_some_and(|ident| {
        matches!(
            ident.as_str(),
            "i8" | "i16"
                | "i32"
                | "i64"
                | "i128"
                | "isize"
                | "u8"
                | "u16"
                | "u32"
                | "u64"
                | "u128"
                | "usize"
                | "f32"
                | "f64"
                | "bool"
                | "char"
        )
    })
}

/// Checks if a type is spelled as plain `bool`.
pub(crate) fn is_bool_type(ty: &syn::Type) -> bool {
    simple_ident(ty).is_some_and(|ident| ident == "bool")
}
