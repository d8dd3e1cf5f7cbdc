use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parenthesized, parse_macro_input, Attribute, Ident, ItemFn, Lit, Meta, Token};

/// Registers a native function as an attribute of a builtin value type.
///
/// The attribute argument names the owner, the attribute and its positional
/// parameters. A parameter prefixed with `..` collects the remaining arguments
/// and must come last.
///
/// ```ignore
/// /// Replaces the element at `index`.
/// #[eo_builtin(array.replace(index, value))]
/// fn array_replace(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
///     // ...
/// }
/// ```
///
/// The function is kept as written and a
/// `crate::runtime::builtin_registry::MethodRegistration` is submitted to
/// `inventory`, carrying the doc comments of the function. The calling crate
/// must depend on `inventory`.
#[proc_macro_attribute]
pub fn eo_builtin(attr: TokenStream, item: TokenStream) -> TokenStream {
    let path = parse_macro_input!(attr as BuiltinPath);
    let func = parse_macro_input!(item as ItemFn);

    match expand(path, func) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct BuiltinPath {
    owner: Ident,
    method: Ident,
    params: Vec<Param>,
}

struct Param {
    name: Ident,
    rest: bool,
}

impl Parse for Param {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let rest = input.peek(Token![..]);
        if rest {
            input.parse::<Token![..]>()?;
        }
        let name = input.call(Ident::parse_any)?;
        Ok(Param { name, rest })
    }
}

impl Parse for BuiltinPath {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let owner = input.call(Ident::parse_any)?;
        input.parse::<Token![.]>()?;
        let method = input.call(Ident::parse_any)?;

        let mut params = Vec::new();
        if !input.is_empty() {
            let content;
            parenthesized!(content in input);
            params = Punctuated::<Param, Token![,]>::parse_terminated(&content)?
                .into_iter()
                .collect();
        }

        if let Some(pos) = params.iter().position(|p| p.rest) {
            if pos + 1 != params.len() {
                return Err(syn::Error::new(
                    params[pos].name.span(),
                    "a rest parameter must be the last parameter",
                ));
            }
        }

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the parameter list"));
        }

        Ok(BuiltinPath {
            owner,
            method,
            params,
        })
    }
}

fn extract_doc_comments(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if attr.path().is_ident("doc") {
                if let Meta::NameValue(meta) = &attr.meta {
                    if let syn::Expr::Lit(expr_lit) = &meta.value {
                        if let Lit::Str(lit_str) = &expr_lit.lit {
                            return Some(lit_str.value().trim().to_string());
                        }
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn expand(path: BuiltinPath, func: ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    if func.sig.inputs.len() != 2 {
        return Err(syn::Error::new_spanned(
            &func.sig,
            "builtin attributes take exactly `(this: &Value, args: &[Value])`",
        ));
    }

    let fn_name = &func.sig.ident;
    let owner = path.owner.unraw().to_string();
    let method = path.method.unraw().to_string();
    let params: Vec<String> = path
        .params
        .iter()
        .map(|p| p.name.unraw().to_string())
        .collect();
    let variadic = path.params.last().is_some_and(|p| p.rest);
    let doc = extract_doc_comments(&func.attrs);

    Ok(quote! {
        #func

        ::inventory::submit! {
            crate::runtime::builtin_registry::MethodRegistration {
                owner: #owner,
                name: #method,
                params: &[#(#params),*],
                variadic: #variadic,
                doc: #doc,
                method: #fn_name,
            }
        }
    })
}
