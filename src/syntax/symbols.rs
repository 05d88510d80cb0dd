//! Declared symbols of a source file
//!
//! A flat, source-ordered listing of the names a file declares, with enough
//! context (kind, container, line) for naming rules to report precisely.
//! Containers are immediate parents only: a field names its struct, a method
//! names its self type, an item in a module names the module.

use serde::{Deserialize, Serialize};
use syn::{ImplItem, Item, TraitItem, Type};

/// What a declared name is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    Module,
    Struct,
    Enum,
    Variant,
    Trait,
    Function,
    Method,
    Field,
    Const,
    Static,
    TypeAlias,
}

/// One declared name, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    /// Immediate named parent, if any.
    pub container: Option<String>,
    /// 1-based line of the declaring identifier.
    pub line: usize,
}

impl Symbol {
    /// The name prefixed with its container, for reporting.
    pub fn qualified_name(&self) -> String {
        match &self.container {
            Some(container) => format!("{}::{}", container, self.name),
            None => self.name.clone(),
        }
    }
}

/// All symbols declared in `file`, in source order.
pub fn collect_symbols(file: &syn::File) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    collect_items(&file.items, None, &mut symbols);
    symbols
}

fn collect_items(items: &[Item], container: Option<&str>, symbols: &mut Vec<Symbol>) {
    for item in items {
        match item {
            Item::Mod(item_mod) => {
                push(symbols, SymbolKind::Module, &item_mod.ident, container);
                if let Some((_, inner)) = &item_mod.content {
                    let name = item_mod.ident.to_string();
                    collect_items(inner, Some(&name), symbols);
                }
            }
            Item::Struct(item_struct) => {
                push(symbols, SymbolKind::Struct, &item_struct.ident, container);
                let name = item_struct.ident.to_string();
                for field in &item_struct.fields {
                    if let Some(ident) = &field.ident {
                        push(symbols, SymbolKind::Field, ident, Some(&name));
                    }
                }
            }
            Item::Enum(item_enum) => {
                push(symbols, SymbolKind::Enum, &item_enum.ident, container);
                let name = item_enum.ident.to_string();
                for variant in &item_enum.variants {
                    push(symbols, SymbolKind::Variant, &variant.ident, Some(&name));
                }
            }
            Item::Trait(item_trait) => {
                push(symbols, SymbolKind::Trait, &item_trait.ident, container);
                let name = item_trait.ident.to_string();
                for member in &item_trait.items {
                    match member {
                        TraitItem::Fn(method) => {
                            push(symbols, SymbolKind::Method, &method.sig.ident, Some(&name));
                        }
                        TraitItem::Const(constant) => {
                            push(symbols, SymbolKind::Const, &constant.ident, Some(&name));
                        }
                        TraitItem::Type(alias) => {
                            push(symbols, SymbolKind::TypeAlias, &alias.ident, Some(&name));
                        }
                        _ => {}
                    }
                }
            }
            Item::Impl(item_impl) => {
                let self_type = impl_type_name(&item_impl.self_ty);
                for member in &item_impl.items {
                    match member {
                        ImplItem::Fn(method) => {
                            push(
                                symbols,
                                SymbolKind::Method,
                                &method.sig.ident,
                                self_type.as_deref(),
                            );
                        }
                        ImplItem::Const(constant) => {
                            push(
                                symbols,
                                SymbolKind::Const,
                                &constant.ident,
                                self_type.as_deref(),
                            );
                        }
                        ImplItem::Type(alias) => {
                            push(
                                symbols,
                                SymbolKind::TypeAlias,
                                &alias.ident,
                                self_type.as_deref(),
                            );
                        }
                        _ => {}
                    }
                }
            }
            Item::Fn(item_fn) => {
                push(symbols, SymbolKind::Function, &item_fn.sig.ident, container);
            }
            Item::Const(item_const) => {
                push(symbols, SymbolKind::Const, &item_const.ident, container);
            }
            Item::Static(item_static) => {
                push(symbols, SymbolKind::Static, &item_static.ident, container);
            }
            Item::Type(item_type) => {
                push(symbols, SymbolKind::TypeAlias, &item_type.ident, container);
            }
            _ => {}
        }
    }
}

fn push(symbols: &mut Vec<Symbol>, kind: SymbolKind, ident: &syn::Ident, container: Option<&str>) {
    symbols.push(Symbol {
        kind,
        name: ident.to_string(),
        container: container.map(str::to_owned),
        line: ident.span().start().line,
    });
}

/// Last path segment of an impl's self type, ignoring generics.
pub(crate) fn impl_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        Type::Reference(reference) => impl_type_name(&reference.elem),
        _ => None,
    }
}
