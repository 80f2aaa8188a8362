//! Derive macro for `fieldcheck_shared::Constrained`.
//!
//! ```ignore
//! #[derive(Constrained)]
//! struct RegisterRequest {
//!     #[validate(label = "用户名", rule = "required")]
//!     username: String,
//!     #[validate(field = "email", label = "邮箱", rules("required", "email"))]
//!     email_address: String,
//!     #[validate(rule = "max_len=64")]
//!     nickname: Option<String>,
//! }
//! ```
//!
//! Field order and rule order are kept exactly as written. Labels are stored
//! in the generated constraint table; nothing is looked up at runtime.

use proc_macro::TokenStream;
use quote::quote;
use std::collections::BTreeSet;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr};

/// Derive `fieldcheck_shared::Constrained` from `#[validate(...)]` field attributes.
#[proc_macro_derive(Constrained, attributes(validate))]
pub fn derive_constrained(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand_constrained(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_constrained(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Constrained can only be derived for structs",
        ));
    };

    let fields = match &struct_data.fields {
        Fields::Named(fields) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &struct_data.fields,
                "Constrained requires named fields",
            ));
        },
    };

    let mut seen = BTreeSet::new();
    let mut declared = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let Some(declaration) = parse_field_declaration(&field.attrs, ident)? else {
            continue;
        };
        if !seen.insert(declaration.name.clone()) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("field name `{}` is declared twice", declaration.name),
            ));
        }
        declared.push((ident.clone(), declaration));
    }

    let constraints = declared.iter().map(|(_, declaration)| {
        let name = LitStr::new(&declaration.name, proc_macro2::Span::call_site());
        let label = match &declaration.label {
            Some(label) => quote! { Some(#label) },
            None => quote! { None },
        };
        let rules = declaration.rules.iter().map(|rule| {
            let rule_name = LitStr::new(&rule.name, proc_macro2::Span::call_site());
            let params = rule
                .params
                .iter()
                .map(|param| LitStr::new(param, proc_macro2::Span::call_site()));
            quote! {
                fieldcheck_shared::RuleSpec {
                    name: #rule_name,
                    params: &[#(#params),*],
                }
            }
        });
        quote! {
            fieldcheck_shared::FieldConstraint {
                field: #name,
                label: #label,
                rules: &[#(#rules),*],
            }
        }
    });

    let arms = declared.iter().map(|(ident, declaration)| {
        let name = LitStr::new(&declaration.name, proc_macro2::Span::call_site());
        quote! {
            #name => fieldcheck_shared::AsFieldValue::as_field_value(&self.#ident),
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics fieldcheck_shared::Constrained for #name #ty_generics #where_clause {
            fn constraints() -> &'static [fieldcheck_shared::FieldConstraint] {
                const CONSTRAINTS: &[fieldcheck_shared::FieldConstraint] = &[#(#constraints),*];
                CONSTRAINTS
            }

            fn field_value(&self, field: &str) -> fieldcheck_shared::FieldValue<'_> {
                match field {
                    #(#arms)*
                    _ => fieldcheck_shared::FieldValue::Missing,
                }
            }
        }
    })
}

#[derive(Debug)]
struct FieldDeclaration {
    name: String,
    label: Option<LitStr>,
    rules: Vec<RuleDecl>,
}

#[derive(Debug)]
struct RuleDecl {
    name: String,
    params: Vec<String>,
}

fn parse_field_declaration(
    attrs: &[Attribute],
    ident: &Ident,
) -> Result<Option<FieldDeclaration>, syn::Error> {
    let mut rules = Vec::new();
    let mut label: Option<LitStr> = None;
    let mut field_name_override: Option<String> = None;
    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("field") {
                let value: LitStr = meta.value()?.parse()?;
                if field_name_override.is_some() {
                    return Err(meta.error("duplicate validate(field = ...)"));
                }
                field_name_override = Some(value.value());
                return Ok(());
            }
            if meta.path.is_ident("label") {
                let value: LitStr = meta.value()?.parse()?;
                if label.is_some() {
                    return Err(meta.error("duplicate validate(label = ...)"));
                }
                if value.value().trim().is_empty() {
                    return Err(meta.error("validate(label = ...) must be non-empty"));
                }
                label = Some(value);
                return Ok(());
            }
            if meta.path.is_ident("rule") {
                let value: LitStr = meta.value()?.parse()?;
                rules.push(parse_rule(&value)?);
                return Ok(());
            }
            if meta.path.is_ident("rules") {
                parse_rule_list(&meta, &mut rules)?;
                return Ok(());
            }
            Err(meta.error("unsupported validate attribute on field"))
        })?;
    }

    if rules.is_empty() {
        if label.is_some() || field_name_override.is_some() {
            return Err(syn::Error::new_spanned(
                ident,
                "validate attributes on a field need at least one rule",
            ));
        }
        return Ok(None);
    }

    let name = field_name_override.unwrap_or_else(|| ident.to_string());
    Ok(Some(FieldDeclaration { name, label, rules }))
}

fn parse_rule_list(
    meta: &syn::meta::ParseNestedMeta<'_>,
    rules: &mut Vec<RuleDecl>,
) -> Result<(), syn::Error> {
    let content;
    syn::parenthesized!(content in meta.input);
    let list = content.parse_terminated(<LitStr as syn::parse::Parse>::parse, syn::Token![,])?;
    if list.is_empty() {
        return Err(meta.error("rules(...) must list at least one rule"));
    }
    for value in &list {
        rules.push(parse_rule(value)?);
    }
    Ok(())
}

fn parse_rule(value: &LitStr) -> Result<RuleDecl, syn::Error> {
    let raw = value.value();
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(syn::Error::new_spanned(value, "rule must be non-empty"));
    }
    if raw.contains(',') {
        return Err(syn::Error::new_spanned(
            value,
            "one rule per string; use rules(\"a\", \"b\") for several",
        ));
    }
    match raw.split_once('=') {
        None => Ok(RuleDecl {
            name: raw.to_string(),
            params: Vec::new(),
        }),
        Some((name, params)) => {
            let name = name.trim();
            if name.is_empty() {
                return Err(syn::Error::new_spanned(value, "rule name before `=` is empty"));
            }
            let params: Vec<String> = params.split_whitespace().map(str::to_string).collect();
            if params.is_empty() {
                return Err(syn::Error::new_spanned(
                    value,
                    "missing parameters after `=`",
                ));
            }
            Ok(RuleDecl {
                name: name.to_string(),
                params,
            })
        },
    }
}
