use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

fn extract_doc(attrs: &[syn::Attribute]) -> Vec<String> {
    let mut lines = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("doc")
            && let syn::Meta::NameValue(nv) = &attr.meta
            && let syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) = &nv.value
        {
            lines.push(s.value());
        }
    }
    lines
}

/// 顶格（仅有doc注释自带的一个空格）且以`:`开头的行声明一个命令，取其第一个单词。
fn extract_cmds(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.strip_prefix(' ').unwrap_or(line))
        .filter(|line| line.starts_with(':'))
        .filter_map(|line| line.split_whitespace().next())
        .map(|cmd| cmd.to_string())
        .collect()
}

/// 去掉doc注释自带的前导空格。
fn join_doc(lines: &[String]) -> String {
    lines.iter().map(|line| line.strip_prefix(' ').unwrap_or(line)).collect::<Vec<_>>().join("\n")
}

#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(enum_name, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    // ==============================
    // 1. 生成 help(&self) 方法
    // ==============================
    let help_entries = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let doc = join_doc(&extract_doc(&v.attrs));
        let pattern = match &v.fields {
            Fields::Unit => quote! { #variant_name },
            Fields::Unnamed(_) => quote! { #variant_name(..) },
            Fields::Named(_) => quote! { #variant_name { .. } },
        };
        quote! {
            Self::#pattern => #doc,
        }
    });

    // ===========================================
    // 2. 生成 all_help()：返回所有 (cmds, doc) 对
    // ===========================================
    let all_help_entries = variants.iter().map(|v| {
        let lines = extract_doc(&v.attrs);
        let cmds = extract_cmds(&lines);
        let doc = join_doc(&lines);
        quote! {
            (&[#(#cmds),*] as &'static [&'static str], #doc)
        }
    });

    let expanded = quote! {
        #[allow(dead_code)]
        impl #enum_name {
            /// 获取帮助信息。
            pub fn help(&self) -> &'static str {
                match self {
                    #(#help_entries)*
                }
            }

            /// 获取全部帮助信息：[(cmds, help), ...]
            pub fn all_help() -> &'static [(&'static [&'static str], &'static str)] {
                &[
                    #(#all_help_entries),*
                ]
            }

            /// 按命令名查找帮助信息，忽略大小写。
            pub fn find_help(cmd: &str) -> Option<&'static str> {
                Self::all_help()
                    .iter()
                    .find(|(cmds, _)| cmds.iter().any(|c| c.eq_ignore_ascii_case(cmd)))
                    .map(|(_, help)| *help)
            }
        }
    };

    TokenStream::from(expanded)
}
