//! Lines of code
//!
//! Counts the distinct physical source lines touched by the statements of a
//! body. Working state is a set of line numbers, so a line shared by several
//! statements is counted once and a statement spanning several lines counts
//! each boundary it touches.
//!
//! Statement shapes contribute differently:
//!
//! - a plain statement adds its start and end lines
//! - an `if` adds only its condition's lines; the branches are visited as
//!   nested statements, so brace-only lines never count
//! - a `let` adds its own span, plus each field value of a struct-literal
//!   initializer so the interior of a multi-line literal is covered
//! - a `return` adds its own lines plus the returned expression's lines
//! - a `for` loop adds the iterated expression's lines and visits the body
//! - a `match` adds the scrutinee and every arm pattern; arm bodies are
//!   visited as nested statements
//!
//! Anything else falls back to start and end lines without recursion.
//!
//! Requires spans with real locations: parse the source text itself rather
//! than building trees from token streams.

use std::collections::BTreeSet;

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Block, Expr, ExprIf, ExprMatch, Stmt};

use crate::syntax::Node;

/// Distinct physical lines occupied by the statements of `body`.
pub fn count(body: &Block) -> usize {
    count_pruned(body, |_| true)
}

/// Distinct physical lines of `body`, skipping pruned statements.
///
/// `include` is consulted once per statement; a false return drops the
/// statement and everything below it from the line set.
pub fn count_pruned<P>(body: &Block, include: P) -> usize
where
    P: FnMut(&Node<'_>) -> bool,
{
    let mut collector = LineCollector {
        lines: BTreeSet::new(),
        include,
    };
    collector.block(body);
    collector.lines.len()
}

struct LineCollector<P> {
    lines: BTreeSet<usize>,
    include: P,
}

impl<P> LineCollector<P>
where
    P: FnMut(&Node<'_>) -> bool,
{
    fn block(&mut self, block: &Block) {
        for stmt in &block.stmts {
            self.stmt(stmt);
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        if !(self.include)(&Node::Stmt(stmt)) {
            return;
        }
        match stmt {
            Stmt::Local(local) => {
                self.span_bounds(local.span());
                if let Some(init) = &local.init {
                    if matches!(&*init.expr, Expr::Struct(_)) {
                        self.expr_lines(&init.expr);
                    }
                }
            }
            Stmt::Expr(expr, _) => self.stmt_expr(expr),
            Stmt::Item(item) => self.span_bounds(item.span()),
            Stmt::Macro(stmt_macro) => self.span_bounds(stmt_macro.span()),
        }
    }

    fn stmt_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::If(expr_if) => self.expr_if(expr_if),
            Expr::Match(expr_match) => self.expr_match(expr_match),
            Expr::ForLoop(for_loop) => {
                self.span_bounds(for_loop.expr.span());
                self.block(&for_loop.body);
            }
            Expr::Return(expr_return) => {
                self.span_bounds(expr_return.span());
                if let Some(value) = &expr_return.expr {
                    self.expr_lines(value);
                }
            }
            other => self.expr_lines(other),
        }
    }

    fn expr_if(&mut self, expr_if: &ExprIf) {
        self.span_bounds(expr_if.cond.span());
        self.block(&expr_if.then_branch);
        if let Some((_, else_branch)) = &expr_if.else_branch {
            match &**else_branch {
                Expr::If(nested) => self.expr_if(nested),
                Expr::Block(else_block) => self.block(&else_block.block),
                other => self.expr_lines(other),
            }
        }
    }

    fn expr_match(&mut self, expr_match: &ExprMatch) {
        self.span_bounds(expr_match.expr.span());
        for arm in &expr_match.arms {
            self.span_bounds(arm.pat.span());
            match &*arm.body {
                Expr::Block(body) => self.block(&body.block),
                other => self.stmt_expr(other),
            }
        }
    }

    /// Start and end lines of an expression, expanding struct literals so
    /// every field value contributes its own lines.
    fn expr_lines(&mut self, expr: &Expr) {
        self.span_bounds(expr.span());
        if let Expr::Struct(expr_struct) = expr {
            for field in &expr_struct.fields {
                self.expr_lines(&field.expr);
            }
        }
    }

    fn span_bounds(&mut self, span: Span) {
        self.lines.insert(span.start().line);
        self.lines.insert(span.end().line);
    }
}
