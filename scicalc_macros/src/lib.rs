use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, FnArg, ItemFn, PatType, ReturnType, Type};

fn formatted_arg_error_msg(arg_name: &str, arg_pos: usize, fn_name: &str) -> String {
    format!(
        "Expected argument {} ('{}') to be f64, for {}",
        arg_pos, arg_name, fn_name
    )
}

fn is_f64(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "f64"),
        _ => false,
    }
}

/// Turns a `fn name(x: f64, ..) -> Result<f64, CalcError>` into a pair of functions:
///
/// * `try_name`, keeping the body as written, for callers that propagate with `?`
/// * `name`, which packages the outcome into an `EvalResult`
///
/// `EvalResult` must be in scope where the attribute is used.
#[proc_macro_attribute]
pub fn calc_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let attrs = &input.attrs;
    let vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_args = &input.sig.inputs;
    let fn_body = &input.block;
    let fn_output = &input.sig.output;
    let try_name = format_ident!("try_{}", fn_name);

    if let ReturnType::Default = fn_output {
        return syn::Error::new_spanned(
            &input.sig,
            format!("{} must return Result<f64, CalcError>", fn_name),
        )
        .to_compile_error()
        .into();
    }

    let mut arg_names = Vec::new();

    for (i, arg) in fn_args.iter().enumerate() {
        match arg {
            FnArg::Typed(PatType { pat, ty, .. }) => {
                let arg_name = match **pat {
                    syn::Pat::Ident(ref ident) => &ident.ident,
                    _ => {
                        return syn::Error::new_spanned(pat, "Unsupported pattern")
                            .to_compile_error()
                            .into()
                    }
                };

                if !is_f64(ty) {
                    let err_msg =
                        formatted_arg_error_msg(&arg_name.to_string(), i, &fn_name.to_string());
                    return syn::Error::new_spanned(ty, err_msg)
                        .to_compile_error()
                        .into();
                }

                arg_names.push(arg_name.clone());
            }
            FnArg::Receiver(receiver) => {
                return syn::Error::new_spanned(receiver, "calc_fn cannot take self")
                    .to_compile_error()
                    .into()
            }
        }
    }

    let try_doc = format!(
        "Fallible form of [`{}`], propagating the error instead of packaging it.",
        fn_name
    );

    let expanded = quote! {
        #[doc = #try_doc]
        #vis fn #try_name(#fn_args) #fn_output #fn_body

        #(#attrs)*
        #vis fn #fn_name(#fn_args) -> EvalResult {
            EvalResult::from(#try_name(#(#arg_names),*))
        }
    };

    TokenStream::from(expanded)
}
