//! Per-function metrics
//!
//! Ties the counters together: parse a source file, find every function
//! body (free functions, impl methods, trait defaults), and score each one
//! for cyclomatic complexity and lines of code. Nested functions are pruned
//! from their parent's score and reported as entries of their own.

use serde::{Deserialize, Serialize};
use syn::{Attribute, Block, ImplItem, Item, ItemFn, Stmt, TraitItem};

use crate::complexity::{self, is_nested_function};
use crate::errors::NomenError;
use crate::syntax::symbols::impl_type_name;
use crate::syntax::{walk, Flow, Node};

/// Scores for one function body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMetrics {
    pub name: String,
    /// 1-based line of the function's identifier.
    pub line: usize,
    pub cyclomatic: u32,
    pub lines_of_code: usize,
    /// Marked `#[test]` or declared inside a `#[cfg(test)]` module.
    pub is_test: bool,
    /// Declared inside another function's body.
    pub nested: bool,
}

/// Parse `source` and score every function in it.
pub fn analyze_source(source: &str) -> Result<Vec<FunctionMetrics>, NomenError> {
    let file = syn::parse_file(source)?;
    Ok(analyze_file(&file))
}

/// Score every function of an already-parsed file.
pub fn analyze_file(file: &syn::File) -> Vec<FunctionMetrics> {
    let mut metrics = Vec::new();
    collect_items(&file.items, false, &mut metrics);
    metrics
}

fn collect_items(items: &[Item], in_test_module: bool, metrics: &mut Vec<FunctionMetrics>) {
    for item in items {
        match item {
            Item::Fn(item_fn) => {
                let is_test = in_test_module || is_test_fn(&item_fn.attrs);
                score_function(
                    item_fn.sig.ident.to_string(),
                    ident_line(&item_fn.sig.ident),
                    &item_fn.block,
                    is_test,
                    false,
                    metrics,
                );
            }
            Item::Impl(item_impl) => {
                let self_type = impl_type_name(&item_impl.self_ty);
                for member in &item_impl.items {
                    if let ImplItem::Fn(method) = member {
                        let is_test = in_test_module || is_test_fn(&method.attrs);
                        score_function(
                            member_name(self_type.as_deref(), &method.sig.ident),
                            ident_line(&method.sig.ident),
                            &method.block,
                            is_test,
                            false,
                            metrics,
                        );
                    }
                }
            }
            Item::Trait(item_trait) => {
                let trait_name = item_trait.ident.to_string();
                for member in &item_trait.items {
                    if let TraitItem::Fn(method) = member {
                        if let Some(body) = &method.default {
                            score_function(
                                member_name(Some(&trait_name), &method.sig.ident),
                                ident_line(&method.sig.ident),
                                body,
                                in_test_module,
                                false,
                                metrics,
                            );
                        }
                    }
                }
            }
            Item::Mod(item_mod) => {
                if let Some((_, inner)) = &item_mod.content {
                    let in_tests = in_test_module || is_cfg_test(&item_mod.attrs);
                    collect_items(inner, in_tests, metrics);
                }
            }
            _ => {}
        }
    }
}

fn score_function(
    name: String,
    line: usize,
    body: &Block,
    is_test: bool,
    nested: bool,
    metrics: &mut Vec<FunctionMetrics>,
) {
    let cyclomatic = complexity::cyclomatic_pruned(body, |node| !is_nested_function(node));
    let lines_of_code = complexity::lines_of_code_pruned(body, |node| !is_nested_function(node));
    log::debug!("scored {name}: cyclomatic {cyclomatic}, lines of code {lines_of_code}");
    let inner = nested_functions(body);
    metrics.push(FunctionMetrics {
        name: name.clone(),
        line,
        cyclomatic,
        lines_of_code,
        is_test,
        nested,
    });
    for nested_fn in inner {
        score_function(
            member_name(Some(&name), &nested_fn.sig.ident),
            ident_line(&nested_fn.sig.ident),
            &nested_fn.block,
            is_test,
            true,
            metrics,
        );
    }
}

/// Function items declared directly in `body`, not those nested deeper.
fn nested_functions<'ast>(body: &'ast Block) -> Vec<&'ast ItemFn> {
    let mut found = Vec::new();
    walk(body, |node| {
        if let Node::Stmt(Stmt::Item(Item::Fn(item_fn))) = node {
            found.push(item_fn);
            return Flow::Prune;
        }
        Flow::Descend
    });
    found
}

fn member_name(container: Option<&str>, ident: &syn::Ident) -> String {
    match container {
        Some(container) => format!("{container}::{ident}"),
        None => ident.to_string(),
    }
}

fn ident_line(ident: &syn::Ident) -> usize {
    ident.span().start().line
}

fn is_test_fn(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path()
            .segments
            .last()
            .map(|segment| segment.ident == "test")
            .unwrap_or(false)
    })
}

fn is_cfg_test(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Path>()
                .map(|path| path.is_ident("test"))
                .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn free_functions_are_scored() {
        let metrics = analyze_source(indoc! {"
            fn plain() {
                act();
            }

            fn branchy(flag: bool) {
                if flag {
                    act();
                }
            }
        "})
        .unwrap();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].name, "plain");
        assert_eq!(metrics[0].cyclomatic, 1);
        assert_eq!(metrics[1].name, "branchy");
        assert_eq!(metrics[1].cyclomatic, 2);
        assert_eq!(metrics[1].line, 5);
    }

    #[test]
    fn impl_methods_carry_their_type() {
        let metrics = analyze_source(indoc! {"
            struct Engine;

            impl Engine {
                fn start(&self) {}
            }
        "})
        .unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].name, "Engine::start");
    }

    #[test]
    fn trait_default_bodies_are_scored() {
        let metrics = analyze_source(indoc! {"
            trait Runner {
                fn run(&self);

                fn retry(&self) {
                    self.run();
                    self.run();
                }
            }
        "})
        .unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].name, "Runner::retry");
    }

    #[test]
    fn nested_functions_are_scored_separately() {
        let metrics = analyze_source(indoc! {"
            fn outer(flag: bool) {
                fn helper(x: u32) -> u32 {
                    if x > 0 {
                        x
                    } else {
                        0
                    }
                }
                if flag {
                    helper(1);
                }
            }
        "})
        .unwrap();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].name, "outer");
        assert_eq!(metrics[0].cyclomatic, 2, "helper's if is not outer's");
        assert!(!metrics[0].nested);
        assert_eq!(metrics[1].name, "outer::helper");
        assert_eq!(metrics[1].cyclomatic, 2);
        assert!(metrics[1].nested);
    }

    #[test]
    fn test_functions_are_flagged() {
        let metrics = analyze_source(indoc! {"
            #[test]
            fn checks_something() {
                assert!(true);
            }

            #[cfg(test)]
            mod tests {
                fn helper() {}
            }

            fn production() {}
        "})
        .unwrap();
        assert!(metrics[0].is_test);
        assert!(metrics[1].is_test, "cfg(test) module contents are tests");
        assert!(!metrics[2].is_test);
    }

    #[test]
    fn invalid_source_is_a_parse_error() {
        let result = analyze_source("fn broken( {");
        assert!(result.is_err());
    }
}
