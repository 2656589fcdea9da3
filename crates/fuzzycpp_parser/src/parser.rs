//! The fuzzy parser implementation.
//!
//! A hand-written recursive descent recognizer over a pre-lexed token
//! stream. Recognizers are speculative: each fallible one runs inside
//! [`Parser::attempt`], which rewinds the cursor to its entry position when
//! the recognizer returns `None`. `None` is the universal "did not apply"
//! signal; the dispatcher tries the next alternative, and when everything
//! fails it resynchronizes at a statement boundary and boxes the skipped
//! tokens into an `UnparsableBlock`. Nothing here ever rejects input.
//!
//! Token back-references are written once, after the tree is finished, so
//! speculative passes leave the token buffer untouched.

use bumpalo::Bump;
use tracing::{debug, trace};

use fuzzycpp_ast::*;
use fuzzycpp_core::NodeId;
use fuzzycpp_token::{AnnotatedToken, TokenKind};

use crate::cursor::TokenCursor;
use crate::precedence::{binary_operator_precedence, Precedence};

/// Maximum recursion depth for nested expressions and template types;
/// deeper input fails the innermost recognizer instead of overflowing the
/// stack.
const MAX_RECURSION_DEPTH: u32 = 200;

/// The parser produces a `TranslationUnit` from an annotated token buffer.
///
/// Nodes are allocated bottom-up; child expressions and frozen statement
/// lists go into the caller's arena, so the translation unit borrows both
/// the arena and the token buffer.
pub struct Parser<'a> {
    arena: &'a Bump,
    cursor: TokenCursor<'a>,
    node_count: u32,
    /// Tracks recursion through the expression and type recognizers, the
    /// two paths that nest through each other via template arguments.
    recursion_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, tokens: &'a [AnnotatedToken]) -> Self {
        Self {
            arena,
            cursor: TokenCursor::new(tokens),
            node_count: 0,
            recursion_depth: 0,
        }
    }

    /// Parse the whole buffer into a translation unit and write every
    /// claimed token's back-reference.
    pub fn parse_translation_unit(mut self) -> TranslationUnit<'a> {
        let mut statements = Vec::new();
        while self.cursor.peek().is_some() {
            if let Some(stmt) = self.parse_any(true, false) {
                statements.push(stmt);
            }
        }
        debug!(statements = statements.len(), "parsed translation unit");

        let data = self.node(AstClass::TranslationUnit);
        let tu = TranslationUnit {
            data,
            statements: self.arena.alloc_slice_fill_iter(statements),
        };
        claim_ast_references(&tu);
        tu
    }

    // ========================================================================
    // Token and speculation helpers
    // ========================================================================

    fn node(&mut self, class: AstClass) -> NodeData {
        let id = NodeId(self.node_count);
        self.node_count += 1;
        NodeData::new(class, id)
    }

    /// Consume the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> Option<Tok<'a>> {
        if self.cursor.at(kind) {
            self.cursor.next()
        } else {
            None
        }
    }

    /// Consume the current token if it satisfies the predicate.
    fn eat_match(&mut self, pred: impl Fn(TokenKind) -> bool) -> Option<Tok<'a>> {
        if self.cursor.at_match(pred) {
            self.cursor.next()
        } else {
            None
        }
    }

    /// Run a speculative recognizer: on `None` the cursor is rewound to
    /// where it was when the attempt started.
    fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.cursor.checkpoint();
        let result = f(self);
        if result.is_none() {
            self.cursor.rewind(checkpoint);
        }
        result
    }

    // ========================================================================
    // Statement dispatch and resynchronization
    // ========================================================================

    /// Try each statement recognizer in fixed order; if none applies and
    /// `skip_unparsable` is set, resynchronize into an `UnparsableBlock`.
    /// `name_optional` is set inside class bodies, where unnamed members and
    /// destructors are accepted.
    fn parse_any(&mut self, skip_unparsable: bool, name_optional: bool) -> Option<Statement<'a>> {
        if let Some(stmt) = self.parse_return_stmt() {
            return Some(stmt);
        }
        if let Some(stmt) = self.parse_decl_stmt() {
            return Some(stmt);
        }
        if let Some(stmt) = self.parse_label_stmt() {
            return Some(stmt);
        }
        if let Some(mut func) = self.parse_function_decl(name_optional) {
            if func.semi.is_none() {
                if let Some(semi) = self.eat(TokenKind::Semi) {
                    func.semi = Some(semi);
                } else if self.cursor.at(TokenKind::LBrace) {
                    func.body = self.parse_compound_stmt();
                }
            }
            return Some(Statement::Function(func));
        }
        if let Some(class) = self.parse_class_decl() {
            return Some(Statement::Class(class));
        }
        if let Some(stmt) = self.attempt(|p| {
            let expr = p.parse_expression(Precedence::COMMA, false)?;
            let semi = p.eat(TokenKind::Semi)?;
            let data = p.node(AstClass::ExprLineStmt);
            Some(Statement::ExprLine(ExprLineStmt { data, expr, semi }))
        }) {
            return Some(stmt);
        }
        if skip_unparsable {
            return self.skip_unparsable().map(Statement::Unparsable);
        }
        None
    }

    /// Consume tokens up to and including the next statement boundary
    /// (`;`, `{`, `}`) and box them into an `UnparsableBlock`.
    fn skip_unparsable(&mut self) -> Option<UnparsableBlock<'a>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.cursor.next() {
            let kind = token.kind;
            tokens.push(token);
            if matches!(kind, TokenKind::Semi | TokenKind::LBrace | TokenKind::RBrace) {
                break;
            }
        }
        if tokens.is_empty() {
            return None;
        }
        trace!(tokens = tokens.len(), "resynchronized over unparsable region");
        let data = self.node(AstClass::UnparsableBlock);
        Some(UnparsableBlock { data, tokens })
    }

    // ========================================================================
    // Simple statements
    // ========================================================================

    fn parse_return_stmt(&mut self) -> Option<Statement<'a>> {
        self.attempt(|p| {
            let return_tok = p.eat(TokenKind::KwReturn)?;
            let value = if p.cursor.at(TokenKind::Semi) {
                None
            } else {
                Some(p.parse_expression(Precedence::COMMA, false)?)
            };
            let semi = p.eat(TokenKind::Semi)?;
            let data = p.node(AstClass::ReturnStmt);
            Some(Statement::Return(ReturnStmt {
                data,
                return_tok,
                value,
                semi,
            }))
        })
    }

    fn parse_label_stmt(&mut self) -> Option<Statement<'a>> {
        self.attempt(|p| {
            let name =
                p.eat_match(|k| k == TokenKind::Identifier || k.is_access_specifier())?;
            let colon = p.eat(TokenKind::Colon)?;
            let data = p.node(AstClass::LabelStmt);
            Some(Statement::Label(LabelStmt { data, name, colon }))
        })
    }

    // ========================================================================
    // Types and qualified names
    // ========================================================================

    /// Parse a type. Callers parsing a declaration statement ask for the
    /// undecorated form, because the decorations belong to the individual
    /// declarators. Template arguments recurse back into this recognizer,
    /// so it shares the recursion ceiling with the expression recognizer.
    fn parse_type(&mut self, with_decorations: bool) -> Option<Type<'a>> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            trace!("type nesting limit reached");
            return None;
        }
        self.recursion_depth += 1;
        let result = self.parse_type_at(with_decorations);
        self.recursion_depth -= 1;
        result
    }

    fn parse_type_at(&mut self, with_decorations: bool) -> Option<Type<'a>> {
        self.attempt(|p| {
            let mut ty = Type::new(p.node(AstClass::Type));
            while let Some(tok) = p.eat_match(TokenKind::is_cv_qualifier) {
                ty.add_name_qualifier(tok);
            }
            if let Some(auto_tok) = p.eat(TokenKind::KwAuto) {
                ty.add_name_qualifier(auto_tok);
            } else if p.cursor.at_match(TokenKind::is_builtin_type) {
                while let Some(tok) = p.eat_match(TokenKind::is_builtin_type) {
                    ty.add_name_qualifier(tok);
                }
            } else if !p.parse_qualified_id(&mut ty) {
                return None;
            }
            while let Some(tok) = p.eat_match(TokenKind::is_cv_qualifier) {
                ty.add_name_qualifier(tok);
            }
            if with_decorations {
                p.parse_type_decorations(&mut ty);
            }
            Some(ty)
        })
    }

    fn parse_type_decorations(&mut self, ty: &mut Type<'a>) {
        while let Some(tok) = self.eat_match(|k| {
            matches!(k, TokenKind::Star | TokenKind::Amp | TokenKind::AmpAmp)
        }) {
            ty.decorations.push(Decoration::classify(tok));
        }
    }

    /// Parse `::A::B<...>::C` into the given owner. The owner is only valid
    /// if this returns true; on failure the cursor is rewound and the caller
    /// must discard the partially filled owner.
    fn parse_qualified_id<Q: QualifiedNameOwner<'a>>(&mut self, owner: &mut Q) -> bool {
        self.attempt(|p| {
            let mut leading_scope_allowed = true;
            loop {
                if let Some(tok) = p.eat(TokenKind::ColonColon) {
                    owner.add_name_qualifier(tok);
                } else if !leading_scope_allowed {
                    return None;
                }
                leading_scope_allowed = false;
                let name = p.eat(TokenKind::Identifier)?;
                owner.add_name_qualifier(name);
                if !p.cursor.at(TokenKind::ColonColon) {
                    break;
                }
            }

            if p.cursor.at(TokenKind::Less) {
                owner.begin_template_args();
                let mut first = true;
                loop {
                    // consumes the `<` on the first pass, `,` afterwards
                    let separator = p.cursor.next()?;
                    owner.add_template_separator(separator);

                    // the empty argument list `<>` is accepted
                    if first && p.cursor.at(TokenKind::Greater) {
                        break;
                    }
                    first = false;

                    if let Some(arg) = p.parse_type(true) {
                        owner.add_template_argument(TemplateArgument::Type(arg));
                    } else if let Some(expr) =
                        p.parse_expression(Precedence::COMMA.higher(), true)
                    {
                        owner.add_template_argument(TemplateArgument::Expression(expr));
                    } else {
                        return None;
                    }
                    if !p.cursor.at(TokenKind::Comma) {
                        break;
                    }
                }
                let close = p.eat(TokenKind::Greater)?;
                owner.add_template_separator(close);
            }
            Some(())
        })
        .is_some()
    }

    // ========================================================================
    // Expressions (precedence climbing)
    // ========================================================================

    /// Parse an expression at the given precedence. `stop_at_greater` makes
    /// a top-level `>` terminate the expression, for template argument
    /// position.
    fn parse_expression(
        &mut self,
        precedence: Precedence,
        stop_at_greater: bool,
    ) -> Option<Expr<'a>> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            trace!("expression nesting limit reached");
            return None;
        }
        self.recursion_depth += 1;
        let result = self.parse_expression_at(precedence, stop_at_greater);
        self.recursion_depth -= 1;
        result
    }

    fn parse_expression_at(
        &mut self,
        precedence: Precedence,
        stop_at_greater: bool,
    ) -> Option<Expr<'a>> {
        self.cursor.peek()?;

        if precedence == Precedence::UNARY {
            return self.parse_unary_operator();
        }
        if precedence > Precedence::MEMBER {
            return self.parse_primary_expression();
        }

        let mut left = self.parse_expression(precedence.higher(), stop_at_greater)?;

        while let Some(token) = self.cursor.peek() {
            if stop_at_greater && token.kind == TokenKind::Greater {
                break;
            }

            let mut current = binary_operator_precedence(token.kind);
            if matches!(token.kind, TokenKind::Period | TokenKind::Arrow) {
                current = Precedence::MEMBER;
            }
            if current == Precedence::NONE {
                return Some(left);
            }

            // The recursive call above consumed everything that binds
            // tighter, so the next operator is at most at our own rank.
            debug_assert!(current <= precedence);
            if current < precedence {
                break;
            }

            let operator = self.cursor.next()?;
            let right = self.parse_expression(precedence.higher(), stop_at_greater)?;
            let data = self.node(AstClass::BinaryOperator);
            left = Expr::Binary(BinaryOperator {
                data,
                operator,
                left: self.arena.alloc(left),
                right: self.arena.alloc(right),
            });
        }

        Some(left)
    }

    /// Unary prefix operators stack; anything else falls through to the
    /// member-access rank.
    fn parse_unary_operator(&mut self) -> Option<Expr<'a>> {
        if self.cursor.at_match(TokenKind::is_unary_prefix_operator) {
            let operator = self.cursor.next()?;
            let operand = self.parse_expression(Precedence::UNARY, false)?;
            let data = self.node(AstClass::UnaryOperator);
            return Some(Expr::Unary(UnaryOperator {
                data,
                operator,
                operand: self.arena.alloc(operand),
            }));
        }
        self.parse_expression(Precedence::MEMBER, false)
    }

    fn parse_primary_expression(&mut self) -> Option<Expr<'a>> {
        let token = self.cursor.peek()?;

        if token.kind.is_literal_or_constant() {
            let token = self.cursor.next()?;
            let data = self.node(AstClass::LiteralConstant);
            return Some(Expr::Literal(LiteralConstant { data, token }));
        }

        if matches!(token.kind, TokenKind::Identifier | TokenKind::ColonColon) {
            let data = self.node(AstClass::DeclRefExpr);
            let mut decl_ref = DeclRefExpr::new(data);
            if !self.parse_qualified_id(&mut decl_ref) {
                return None;
            }
            if self.cursor.at(TokenKind::LParen) {
                return self.parse_call_expr(decl_ref);
            }
            return Some(Expr::DeclRef(decl_ref));
        }

        None
    }

    /// `callee(arg, ...)`. Arguments parse one rank above the comma so that
    /// commas separate arguments; a trailing comma is not accepted.
    fn parse_call_expr(&mut self, callee: DeclRefExpr<'a>) -> Option<Expr<'a>> {
        let lparen = self.eat(TokenKind::LParen)?;
        let mut args = Vec::new();
        let mut commas = Vec::new();
        if !self.cursor.at(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression(Precedence::COMMA.higher(), false)?);
                match self.eat(TokenKind::Comma) {
                    // a comma commits to another argument, so `f(a,)` fails
                    Some(comma) => commas.push(comma),
                    None => break,
                }
            }
        }
        let rparen = self.eat(TokenKind::RParen)?;
        let data = self.node(AstClass::CallExpr);
        Some(Expr::Call(CallExpr {
            data,
            callee,
            lparen,
            args,
            commas,
            rparen,
        }))
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Parse one declarator. With a shared type the declarator clones it
    /// without decorations; otherwise it parses a fresh undecorated type.
    /// Either way the decorations are its own. Parameters may be unnamed.
    fn parse_var_decl(
        &mut self,
        shared_type: Option<&Type<'a>>,
        name_optional: bool,
    ) -> Option<VarDecl<'a>> {
        self.attempt(|p| {
            let mut var_type = match shared_type {
                Some(shared) => {
                    let clone_data = p.node(AstClass::Type);
                    shared.clone_without_decorations(clone_data)
                }
                None => p.parse_type(false)?,
            };
            p.parse_type_decorations(&mut var_type);

            let name = match p.eat(TokenKind::Identifier) {
                Some(name) => Some(name),
                None if name_optional => None,
                None => return None,
            };

            let init = if let Some(equal) = p.eat(TokenKind::Equal) {
                let value = p.parse_expression(Precedence::COMMA.higher(), false)?;
                let data = p.node(AstClass::VarInitialization);
                Some(VarInitialization {
                    data,
                    form: InitializerForm::Assignment,
                    ops: [Some(equal), None],
                    value,
                })
            } else {
                // constructor-call and brace initializers are not recognized
                None
            };

            let data = p.node(AstClass::VarDecl);
            Some(VarDecl {
                data,
                var_type,
                name,
                init,
            })
        })
    }

    /// A declaration statement: an undecorated type followed by one or more
    /// comma-separated declarators and a semicolon.
    fn parse_decl_stmt(&mut self) -> Option<Statement<'a>> {
        self.attempt(|p| {
            let base_type = p.parse_type(false)?;
            let data = p.node(AstClass::DeclStmt);
            let mut decls = Vec::new();
            let mut commas = Vec::new();
            let semi = loop {
                decls.push(p.parse_var_decl(Some(&base_type), false)?);
                if let Some(comma) = p.eat(TokenKind::Comma) {
                    commas.push(comma);
                    continue;
                }
                break p.eat(TokenKind::Semi)?;
            };
            Some(Statement::Decl(DeclStmt {
                data,
                decls,
                commas,
                semi,
            }))
        })
    }

    /// A function declaration: optional storage class, return type (or the
    /// destructor form when names are optional), parenthesized parameters.
    /// Tokens up to the next `{` or `;` are kept as an opaque run; the
    /// caller attaches a body if a `{` follows.
    fn parse_function_decl(&mut self, name_optional: bool) -> Option<FunctionDecl<'a>> {
        self.attempt(|p| {
            let static_tok = p.eat(TokenKind::KwStatic);
            let virtual_tok = p.eat(TokenKind::KwVirtual);

            let mut name = None;
            let mut in_destructor = false;
            let return_type = if let Some(ty) = p.parse_type(true) {
                Some(ty)
            } else if name_optional {
                // `~A()`: the tilde lands in the name slot and the class
                // name parses into the return-type slot
                name = Some(p.eat(TokenKind::Tilde)?);
                in_destructor = true;
                Some(p.parse_type(true)?)
            } else {
                return None;
            };

            if !in_destructor {
                match p.eat(TokenKind::Identifier) {
                    Some(tok) => name = Some(tok),
                    None if name_optional => {}
                    None => return None,
                }
            }

            let lparen = p.eat(TokenKind::LParen)?;
            let mut params = Vec::new();
            let mut param_commas = Vec::new();
            while !p.cursor.at(TokenKind::RParen) {
                params.push(p.parse_var_decl(None, true)?);
                if let Some(comma) = p.eat(TokenKind::Comma) {
                    param_commas.push(comma);
                } else {
                    break;
                }
            }
            let rparen = p.eat(TokenKind::RParen)?;

            // Member initializer lists, attributes and trailing qualifiers
            // are not modeled; keep the raw run attached to this node.
            let mut skipped = Vec::new();
            while let Some(token) = p.cursor.peek() {
                if matches!(token.kind, TokenKind::LBrace | TokenKind::Semi) {
                    break;
                }
                skipped.push(p.cursor.next()?);
            }
            let semi = p.eat(TokenKind::Semi);

            let data = p.node(AstClass::FunctionDecl);
            Some(FunctionDecl {
                data,
                static_tok,
                virtual_tok,
                return_type,
                name,
                lparen,
                params,
                param_commas,
                rparen,
                skipped,
                semi,
                body: None,
            })
        })
    }

    /// A class/struct/union/enum declaration with optional base-class list
    /// and body. A malformed base-clause entry skips forward to the `{`.
    fn parse_class_decl(&mut self) -> Option<ClassDecl<'a>> {
        self.attempt(|p| {
            let class_key = p.eat_match(TokenKind::is_class_key)?;
            let data = p.node(AstClass::ClassDecl);
            let name = p.parse_type(true)?;

            let mut colon = None;
            let mut bases = Vec::new();
            let mut skipped = Vec::new();
            if let Some(tok) = p.eat(TokenKind::Colon) {
                colon = Some(tok);
                let mut skip_to_body = true;
                loop {
                    let access = p.eat_match(TokenKind::is_access_specifier);
                    let Some(base_type) = p.parse_type(false) else {
                        if let Some(access) = access {
                            skipped.push(access);
                        }
                        break;
                    };
                    if p.cursor.at(TokenKind::LBrace) {
                        bases.push(BaseSpecifier {
                            access,
                            base_type,
                            comma: None,
                        });
                        skip_to_body = false;
                        break;
                    }
                    match p.eat(TokenKind::Comma) {
                        Some(comma) => bases.push(BaseSpecifier {
                            access,
                            base_type,
                            comma: Some(comma),
                        }),
                        None => {
                            bases.push(BaseSpecifier {
                                access,
                                base_type,
                                comma: None,
                            });
                            break;
                        }
                    }
                }
                if skip_to_body {
                    while let Some(token) = p.cursor.peek() {
                        if token.kind == TokenKind::LBrace {
                            break;
                        }
                        skipped.push(p.cursor.next()?);
                    }
                }
            }

            let mut body = None;
            let mut semi = p.eat(TokenKind::Semi);
            if semi.is_none() && p.cursor.at(TokenKind::LBrace) {
                body = p.parse_compound_stmt();
                semi = p.eat(TokenKind::Semi);
            }

            Some(ClassDecl {
                data,
                class_key,
                name,
                colon,
                bases,
                skipped,
                body,
                semi,
            })
        })
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    /// An opened `{` followed by statements until the matching `}` or the
    /// end of input. Statements inside a scope parse with optional names so
    /// destructors and unnamed members are accepted.
    fn parse_compound_stmt(&mut self) -> Option<CompoundStmt<'a>> {
        let data = self.node(AstClass::CompoundStmt);
        let lbrace = self.eat(TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while let Some(token) = self.cursor.peek() {
            if token.kind == TokenKind::RBrace {
                break;
            }
            match self.parse_any(true, true) {
                Some(stmt) => statements.push(stmt),
                None => break,
            }
        }
        let rbrace = self.eat(TokenKind::RBrace);
        Some(CompoundStmt {
            data,
            lbrace,
            statements: self.arena.alloc_slice_fill_iter(statements),
            rbrace,
        })
    }
}
