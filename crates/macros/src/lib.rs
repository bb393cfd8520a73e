use proc_macro::TokenStream;
use quote::quote;
use syn::{Expr, Lit, Token, parse_macro_input, punctuated::Punctuated, spanned::Spanned};

fn parse_usize(raw: &str) -> Option<usize> {
    let raw = raw.trim().replace('_', "");
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        usize::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = raw.strip_prefix("0b").or_else(|| raw.strip_prefix("0B")) {
        usize::from_str_radix(bin, 2).ok()
    } else {
        raw.parse().ok()
    }
}

/// `usize_env_or!("NAME", default)` expands to the value of the build-time
/// environment variable `NAME`, or to `default` when it is unset.
///
/// The variable may be written in decimal, `0x` hex or `0b` binary.
#[proc_macro]
pub fn usize_env_or(input: TokenStream) -> TokenStream {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let exprs = parse_macro_input!(input with parser);

    if exprs.len() != 2 {
        return syn::Error::new(exprs.span(), "expected `\"ENV_NAME\", default`")
            .to_compile_error()
            .into();
    }

    let env_var = match &exprs[0] {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Str(lit_str) => lit_str.value(),
            other => {
                return syn::Error::new(other.span(), "environment variable name must be a string literal")
                    .to_compile_error()
                    .into();
            }
        },
        other => {
            return syn::Error::new(other.span(), "environment variable name must be a string literal")
                .to_compile_error()
                .into();
        }
    };

    let default_value = match &exprs[1] {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Int(lit_int) => match lit_int.base10_parse::<usize>() {
                Ok(v) => v,
                Err(e) => return e.to_compile_error().into(),
            },
            other => {
                return syn::Error::new(other.span(), "default value must be an integer literal")
                    .to_compile_error()
                    .into();
            }
        },
        other => {
            return syn::Error::new(other.span(), "default value must be an integer literal")
                .to_compile_error()
                .into();
        }
    };

    let value = match std::env::var(&env_var) {
        Ok(raw) => match parse_usize(&raw) {
            Some(v) => v,
            None => {
                let msg = format!("`{env_var}` is not a valid usize: `{raw}`");
                return syn::Error::new(exprs[0].span(), msg).to_compile_error().into();
            }
        },
        Err(_) => default_value,
    };

    quote! { #value }.into()
}
