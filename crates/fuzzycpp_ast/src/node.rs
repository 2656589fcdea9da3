//! AST node definitions.
//!
//! Every node type embeds a `NodeData` carrying its kind tag and id. Child
//! expressions are arena references, statement bodies are arena slices, and
//! token runs are vectors of borrowed tokens. The arena and the token buffer
//! share the `'a` lifetime; the translation unit borrows both.

use fuzzycpp_core::NodeId;
use fuzzycpp_token::{AnnotatedToken, TokenKind};

/// A borrowed view of a token in the caller's buffer.
pub type Tok<'a> = &'a AnnotatedToken;

/// A list of nodes, frozen into the arena.
pub type NodeList<'a, T> = &'a [T];

/// The kind tag selecting a node's variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AstClass {
    Type,
    VarInitialization,
    VarDecl,
    DeclStmt,
    ExprLineStmt,
    ReturnStmt,
    LabelStmt,
    CompoundStmt,
    FunctionDecl,
    ClassDecl,
    UnparsableBlock,
    DeclRefExpr,
    CallExpr,
    LiteralConstant,
    UnaryOperator,
    BinaryOperator,
    TranslationUnit,
}

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, Copy)]
pub struct NodeData {
    /// The kind of this node.
    pub class: AstClass,
    /// The id tokens use to point back at this node.
    pub id: NodeId,
}

impl NodeData {
    pub fn new(class: AstClass, id: NodeId) -> Self {
        Self { class, id }
    }
}

// ============================================================================
// Types
// ============================================================================

/// Whether a type decoration is a pointer or a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
    Pointer,
    Reference,
}

/// One `*`, `&` or `&&` suffix on a type.
#[derive(Debug, Clone, Copy)]
pub struct Decoration<'a> {
    pub kind: DecorationKind,
    pub token: Tok<'a>,
}

impl<'a> Decoration<'a> {
    pub fn classify(token: Tok<'a>) -> Self {
        let kind = if token.kind == TokenKind::Star {
            DecorationKind::Pointer
        } else {
            DecorationKind::Reference
        };
        Self { kind, token }
    }
}

/// One argument inside a template argument list: either a type or an
/// expression, disambiguated by trying the type alternative first.
#[derive(Debug, Clone)]
pub enum TemplateArgument<'a> {
    Type(Type<'a>),
    Expression(Expr<'a>),
}

/// A template argument list, including its `<`, `,` and `>` tokens.
#[derive(Debug, Clone, Default)]
pub struct TemplateArgumentList<'a> {
    pub separators: Vec<Tok<'a>>,
    pub args: Vec<TemplateArgument<'a>>,
}

/// A type: name qualifiers (cv-qualifiers, `::`, identifiers or builtin
/// keywords), an optional template argument list, and trailing pointer or
/// reference decorations.
#[derive(Debug, Clone)]
pub struct Type<'a> {
    pub data: NodeData,
    pub qualifiers: Vec<Tok<'a>>,
    pub template_args: Option<TemplateArgumentList<'a>>,
    pub decorations: Vec<Decoration<'a>>,
}

impl<'a> Type<'a> {
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            qualifiers: Vec::new(),
            template_args: None,
            decorations: Vec::new(),
        }
    }

    /// Clone this type for an additional declarator, dropping the
    /// decorations (each declarator carries its own). The clone shares the
    /// underlying qualifier tokens; `data` becomes the clone's identity.
    pub fn clone_without_decorations(&self, data: NodeData) -> Type<'a> {
        Type {
            data,
            qualifiers: self.qualifiers.clone(),
            template_args: self.template_args.clone(),
            decorations: Vec::new(),
        }
    }
}

/// The seam between the qualified-name recognizer and the two node types it
/// can build into: `Type` and `DeclRefExpr`.
pub trait QualifiedNameOwner<'a> {
    fn add_name_qualifier(&mut self, token: Tok<'a>);
    fn begin_template_args(&mut self);
    fn add_template_separator(&mut self, token: Tok<'a>);
    fn add_template_argument(&mut self, arg: TemplateArgument<'a>);
}

impl<'a> QualifiedNameOwner<'a> for Type<'a> {
    fn add_name_qualifier(&mut self, token: Tok<'a>) {
        self.qualifiers.push(token);
    }

    fn begin_template_args(&mut self) {
        self.template_args = Some(TemplateArgumentList::default());
    }

    fn add_template_separator(&mut self, token: Tok<'a>) {
        if let Some(args) = &mut self.template_args {
            args.separators.push(token);
        }
    }

    fn add_template_argument(&mut self, arg: TemplateArgument<'a>) {
        if let Some(args) = &mut self.template_args {
            args.args.push(arg);
        }
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// How a variable initializer was written. Only the assignment form is
/// produced today; the constructor-call and brace forms are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitializerForm {
    Assignment,
    Constructor,
    Brace,
}

/// An initializer attached to a declarator: `= expr`, `(expr)` or `{expr}`.
#[derive(Debug, Clone)]
pub struct VarInitialization<'a> {
    pub data: NodeData,
    pub form: InitializerForm,
    /// `=`, or the opening and closing bracket of the other forms.
    pub ops: [Option<Tok<'a>>; 2],
    pub value: Expr<'a>,
}

/// One declarator: its (possibly shared, per-declarator decorated) type, an
/// optional name and an optional initializer. Parameters may be unnamed.
#[derive(Debug, Clone)]
pub struct VarDecl<'a> {
    pub data: NodeData,
    pub var_type: Type<'a>,
    pub name: Option<Tok<'a>>,
    pub init: Option<VarInitialization<'a>>,
}

/// A declaration statement: one or more declarators sharing a type,
/// separated by commas, terminated by a semicolon.
#[derive(Debug)]
pub struct DeclStmt<'a> {
    pub data: NodeData,
    pub decls: Vec<VarDecl<'a>>,
    pub commas: Vec<Tok<'a>>,
    pub semi: Tok<'a>,
}

/// A function declaration or definition, including the destructor form.
///
/// Tokens between `)` and the next `{` or `;` (member initializer lists,
/// attributes, trailing qualifiers) are not modeled structurally; they are
/// kept verbatim in `skipped` so they stay attached to this node.
#[derive(Debug)]
pub struct FunctionDecl<'a> {
    pub data: NodeData,
    pub static_tok: Option<Tok<'a>>,
    pub virtual_tok: Option<Tok<'a>>,
    pub return_type: Option<Type<'a>>,
    /// The declarator name, or the `~` token for destructors.
    pub name: Option<Tok<'a>>,
    pub lparen: Tok<'a>,
    pub params: Vec<VarDecl<'a>>,
    pub param_commas: Vec<Tok<'a>>,
    pub rparen: Tok<'a>,
    pub skipped: Vec<Tok<'a>>,
    pub semi: Option<Tok<'a>>,
    pub body: Option<CompoundStmt<'a>>,
}

impl<'a> FunctionDecl<'a> {
    /// Whether this declaration was recognized in destructor form.
    pub fn is_destructor(&self) -> bool {
        self.name.is_some_and(|t| t.kind == TokenKind::Tilde)
    }
}

/// One entry of a base-class list.
#[derive(Debug)]
pub struct BaseSpecifier<'a> {
    pub access: Option<Tok<'a>>,
    pub base_type: Type<'a>,
    pub comma: Option<Tok<'a>>,
}

/// A class, struct, union or enum declaration.
#[derive(Debug)]
pub struct ClassDecl<'a> {
    pub data: NodeData,
    pub class_key: Tok<'a>,
    pub name: Type<'a>,
    pub colon: Option<Tok<'a>>,
    pub bases: Vec<BaseSpecifier<'a>>,
    /// Tokens consumed while recovering from a malformed base-class list.
    pub skipped: Vec<Tok<'a>>,
    pub body: Option<CompoundStmt<'a>>,
    pub semi: Option<Tok<'a>>,
}

// ============================================================================
// Statements
// ============================================================================

/// `label:` — an identifier or access specifier followed by a colon.
#[derive(Debug)]
pub struct LabelStmt<'a> {
    pub data: NodeData,
    pub name: Tok<'a>,
    pub colon: Tok<'a>,
}

/// `return expr;` or `return;`.
#[derive(Debug)]
pub struct ReturnStmt<'a> {
    pub data: NodeData,
    pub return_tok: Tok<'a>,
    pub value: Option<Expr<'a>>,
    pub semi: Tok<'a>,
}

/// An expression used as a statement, with its semicolon.
#[derive(Debug)]
pub struct ExprLineStmt<'a> {
    pub data: NodeData,
    pub expr: Expr<'a>,
    pub semi: Tok<'a>,
}

/// A `{}`-delimited body of statements. Class bodies reuse this shape.
/// The closing brace may be missing at end of input.
#[derive(Debug)]
pub struct CompoundStmt<'a> {
    pub data: NodeData,
    pub lbrace: Tok<'a>,
    pub statements: NodeList<'a, Statement<'a>>,
    pub rbrace: Option<Tok<'a>>,
}

/// A run of tokens the parser gave up on, ending at a statement boundary
/// (`;`, `{`, `}`) or at the end of the buffer.
#[derive(Debug)]
pub struct UnparsableBlock<'a> {
    pub data: NodeData,
    pub tokens: Vec<Tok<'a>>,
}

/// A statement as produced by the dispatcher.
#[derive(Debug)]
pub enum Statement<'a> {
    Decl(DeclStmt<'a>),
    ExprLine(ExprLineStmt<'a>),
    Return(ReturnStmt<'a>),
    Label(LabelStmt<'a>),
    Function(FunctionDecl<'a>),
    Class(ClassDecl<'a>),
    Unparsable(UnparsableBlock<'a>),
}

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Decl(n) => &n.data,
            Statement::ExprLine(n) => &n.data,
            Statement::Return(n) => &n.data,
            Statement::Label(n) => &n.data,
            Statement::Function(n) => &n.data,
            Statement::Class(n) => &n.data,
            Statement::Unparsable(n) => &n.data,
        }
    }

    pub fn class(&self) -> AstClass {
        self.data().class
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// A qualified name in expression position: `::`-separated qualifier tokens
/// and an optional template argument list.
#[derive(Debug, Clone)]
pub struct DeclRefExpr<'a> {
    pub data: NodeData,
    pub qualifiers: Vec<Tok<'a>>,
    pub template_args: Option<TemplateArgumentList<'a>>,
}

impl<'a> DeclRefExpr<'a> {
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            qualifiers: Vec::new(),
            template_args: None,
        }
    }
}

impl<'a> QualifiedNameOwner<'a> for DeclRefExpr<'a> {
    fn add_name_qualifier(&mut self, token: Tok<'a>) {
        self.qualifiers.push(token);
    }

    fn begin_template_args(&mut self) {
        self.template_args = Some(TemplateArgumentList::default());
    }

    fn add_template_separator(&mut self, token: Tok<'a>) {
        if let Some(args) = &mut self.template_args {
            args.separators.push(token);
        }
    }

    fn add_template_argument(&mut self, arg: TemplateArgument<'a>) {
        if let Some(args) = &mut self.template_args {
            args.args.push(arg);
        }
    }
}

/// A single literal or constant-keyword token.
#[derive(Debug, Clone)]
pub struct LiteralConstant<'a> {
    pub data: NodeData,
    pub token: Tok<'a>,
}

/// A prefix operator applied to an operand.
#[derive(Debug, Clone)]
pub struct UnaryOperator<'a> {
    pub data: NodeData,
    pub operator: Tok<'a>,
    pub operand: &'a Expr<'a>,
}

/// A binary operator with its two operands. Member access (`.`, `->`) is
/// represented here as well, at its own synthetic precedence rank.
#[derive(Debug, Clone)]
pub struct BinaryOperator<'a> {
    pub data: NodeData,
    pub operator: Tok<'a>,
    pub left: &'a Expr<'a>,
    pub right: &'a Expr<'a>,
}

/// `callee(arg, ...)` with the parentheses and separating commas.
#[derive(Debug, Clone)]
pub struct CallExpr<'a> {
    pub data: NodeData,
    pub callee: DeclRefExpr<'a>,
    pub lparen: Tok<'a>,
    pub args: Vec<Expr<'a>>,
    pub commas: Vec<Tok<'a>>,
    pub rparen: Tok<'a>,
}

/// An expression.
#[derive(Debug, Clone)]
pub enum Expr<'a> {
    DeclRef(DeclRefExpr<'a>),
    Literal(LiteralConstant<'a>),
    Unary(UnaryOperator<'a>),
    Binary(BinaryOperator<'a>),
    Call(CallExpr<'a>),
}

impl<'a> Expr<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expr::DeclRef(n) => &n.data,
            Expr::Literal(n) => &n.data,
            Expr::Unary(n) => &n.data,
            Expr::Binary(n) => &n.data,
            Expr::Call(n) => &n.data,
        }
    }

    pub fn class(&self) -> AstClass {
        self.data().class
    }
}

// ============================================================================
// Translation unit
// ============================================================================

/// The root of the tree: the ordered top-level statements.
#[derive(Debug)]
pub struct TranslationUnit<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}
