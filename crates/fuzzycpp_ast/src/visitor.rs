//! AST visitor trait for traversing the partial syntax tree.
//!
//! Default implementations walk into children and report every token a node
//! committed to through `visit_token`, together with the owning node's data.
//! The back-reference claim pass is built on this traversal.

use crate::node::*;

/// A visitor that traverses the AST. Implement this trait to perform
/// operations on each node kind. Default implementations walk into children
/// and surface each node's tokens via `visit_token`.
pub trait AstVisitor<'a> {
    /// Called once for every token reference stored in the tree, with the
    /// node that stores it.
    fn visit_token(&mut self, _owner: &NodeData, _token: Tok<'a>) {}

    fn visit_translation_unit(&mut self, tu: &TranslationUnit<'a>) {
        for stmt in tu.statements.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement<'a>) {
        match stmt {
            Statement::Decl(n) => self.visit_decl_stmt(n),
            Statement::ExprLine(n) => self.visit_expr_line_stmt(n),
            Statement::Return(n) => self.visit_return_stmt(n),
            Statement::Label(n) => self.visit_label_stmt(n),
            Statement::Function(n) => self.visit_function_decl(n),
            Statement::Class(n) => self.visit_class_decl(n),
            Statement::Unparsable(n) => self.visit_unparsable_block(n),
        }
    }

    // -- Statements --

    fn visit_decl_stmt(&mut self, node: &DeclStmt<'a>) {
        for decl in node.decls.iter() {
            self.visit_var_decl(decl);
        }
        for &comma in node.commas.iter() {
            self.visit_token(&node.data, comma);
        }
        self.visit_token(&node.data, node.semi);
    }

    fn visit_expr_line_stmt(&mut self, node: &ExprLineStmt<'a>) {
        self.visit_expr(&node.expr);
        self.visit_token(&node.data, node.semi);
    }

    fn visit_return_stmt(&mut self, node: &ReturnStmt<'a>) {
        self.visit_token(&node.data, node.return_tok);
        if let Some(value) = &node.value {
            self.visit_expr(value);
        }
        self.visit_token(&node.data, node.semi);
    }

    fn visit_label_stmt(&mut self, node: &LabelStmt<'a>) {
        self.visit_token(&node.data, node.name);
        self.visit_token(&node.data, node.colon);
    }

    fn visit_function_decl(&mut self, node: &FunctionDecl<'a>) {
        if let Some(tok) = node.static_tok {
            self.visit_token(&node.data, tok);
        }
        if let Some(tok) = node.virtual_tok {
            self.visit_token(&node.data, tok);
        }
        if let Some(name) = node.name {
            self.visit_token(&node.data, name);
        }
        if let Some(ty) = &node.return_type {
            self.visit_type(ty);
        }
        self.visit_token(&node.data, node.lparen);
        for param in node.params.iter() {
            self.visit_var_decl(param);
        }
        for &comma in node.param_commas.iter() {
            self.visit_token(&node.data, comma);
        }
        self.visit_token(&node.data, node.rparen);
        for &tok in node.skipped.iter() {
            self.visit_token(&node.data, tok);
        }
        if let Some(semi) = node.semi {
            self.visit_token(&node.data, semi);
        }
        if let Some(body) = &node.body {
            self.visit_compound_stmt(body);
        }
    }

    fn visit_class_decl(&mut self, node: &ClassDecl<'a>) {
        self.visit_token(&node.data, node.class_key);
        self.visit_type(&node.name);
        if let Some(colon) = node.colon {
            self.visit_token(&node.data, colon);
        }
        for base in node.bases.iter() {
            if let Some(access) = base.access {
                self.visit_token(&node.data, access);
            }
            self.visit_type(&base.base_type);
            if let Some(comma) = base.comma {
                self.visit_token(&node.data, comma);
            }
        }
        for &tok in node.skipped.iter() {
            self.visit_token(&node.data, tok);
        }
        if let Some(body) = &node.body {
            self.visit_compound_stmt(body);
        }
        if let Some(semi) = node.semi {
            self.visit_token(&node.data, semi);
        }
    }

    fn visit_compound_stmt(&mut self, node: &CompoundStmt<'a>) {
        self.visit_token(&node.data, node.lbrace);
        for stmt in node.statements.iter() {
            self.visit_statement(stmt);
        }
        if let Some(rbrace) = node.rbrace {
            self.visit_token(&node.data, rbrace);
        }
    }

    fn visit_unparsable_block(&mut self, node: &UnparsableBlock<'a>) {
        for &tok in node.tokens.iter() {
            self.visit_token(&node.data, tok);
        }
    }

    // -- Declarations --

    fn visit_var_decl(&mut self, node: &VarDecl<'a>) {
        self.visit_type(&node.var_type);
        if let Some(name) = node.name {
            self.visit_token(&node.data, name);
        }
        if let Some(init) = &node.init {
            self.visit_var_initialization(init);
        }
    }

    fn visit_var_initialization(&mut self, node: &VarInitialization<'a>) {
        for &op in node.ops.iter().flatten() {
            self.visit_token(&node.data, op);
        }
        self.visit_expr(&node.value);
    }

    fn visit_type(&mut self, node: &Type<'a>) {
        for &qual in node.qualifiers.iter() {
            self.visit_token(&node.data, qual);
        }
        if let Some(args) = &node.template_args {
            self.visit_template_args(&node.data, args);
        }
        for dec in node.decorations.iter() {
            self.visit_token(&node.data, dec.token);
        }
    }

    fn visit_template_args(&mut self, owner: &NodeData, list: &TemplateArgumentList<'a>) {
        for &sep in list.separators.iter() {
            self.visit_token(owner, sep);
        }
        for arg in list.args.iter() {
            match arg {
                TemplateArgument::Type(ty) => self.visit_type(ty),
                TemplateArgument::Expression(expr) => self.visit_expr(expr),
            }
        }
    }

    // -- Expressions --

    fn visit_expr(&mut self, expr: &Expr<'a>) {
        match expr {
            Expr::DeclRef(n) => self.visit_decl_ref(n),
            Expr::Literal(n) => self.visit_literal(n),
            Expr::Unary(n) => self.visit_unary(n),
            Expr::Binary(n) => self.visit_binary(n),
            Expr::Call(n) => self.visit_call(n),
        }
    }

    fn visit_decl_ref(&mut self, node: &DeclRefExpr<'a>) {
        for &qual in node.qualifiers.iter() {
            self.visit_token(&node.data, qual);
        }
        if let Some(args) = &node.template_args {
            self.visit_template_args(&node.data, args);
        }
    }

    fn visit_literal(&mut self, node: &LiteralConstant<'a>) {
        self.visit_token(&node.data, node.token);
    }

    fn visit_unary(&mut self, node: &UnaryOperator<'a>) {
        self.visit_token(&node.data, node.operator);
        self.visit_expr(node.operand);
    }

    fn visit_binary(&mut self, node: &BinaryOperator<'a>) {
        self.visit_expr(node.left);
        self.visit_token(&node.data, node.operator);
        self.visit_expr(node.right);
    }

    fn visit_call(&mut self, node: &CallExpr<'a>) {
        self.visit_decl_ref(&node.callee);
        self.visit_token(&node.data, node.lparen);
        for arg in node.args.iter() {
            self.visit_expr(arg);
        }
        for &comma in node.commas.iter() {
            self.visit_token(&node.data, comma);
        }
        self.visit_token(&node.data, node.rparen);
    }
}

/// Write every token's back-reference from the finished tree.
///
/// Declarators sharing a declaration's type also share its qualifier tokens
/// through their clones; the traversal visits declarators in order, so the
/// last clone ends up owning those tokens.
pub fn claim_ast_references(tu: &TranslationUnit<'_>) {
    struct Claimer;

    impl<'a> AstVisitor<'a> for Claimer {
        fn visit_token(&mut self, owner: &NodeData, token: Tok<'a>) {
            token.set_ast_ref(owner.id);
        }
    }

    Claimer.visit_translation_unit(tu);
}
