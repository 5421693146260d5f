use std::fmt;

use serde::Serialize;

/// Longest symbol spelling in the symbol table, in bytes.
pub(crate) const MAX_SYMBOL_LENGTH: usize = 3;

macro_rules! define_tokens {
    (
        symbols { $($sym_name:ident => $sym_text:literal),* $(,)? }
        keywords { $($kw_name:ident => $kw_text:literal),* $(,)? }
        abstracts { $($ab_name:ident => $ab_text:literal),* $(,)? }
        test_keywords { $($test_name:ident => $test_text:literal),* $(,)? }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum TokenId {
            // Payload-carrying and sentinel kinds
            Ident,
            Int,
            Float,
            String,
            Eof,
            LexError,

            // Symbols (operators & delimiters)
            $($sym_name,)*

            // Keywords
            $($kw_name,)*

            // Abstract node kinds: never produced by the scanner, but they
            // have a textual form for AST printing and deserialization.
            $($ab_name,)*

            // $-prefixed keywords accepted only in internal test input
            $($test_name,)*
        }

        /// Symbol table, walked in order by the symbol matcher. Where one
        /// symbol starts with another, the longer must appear first; the
        /// matcher takes the first prefix hit, so ordering is what provides
        /// longest-match. Entries after `Question` share spellings with
        /// earlier ones and exist only for printing.
        pub const SYMBOLS: &[(&str, TokenId)] = &[
            $(($sym_text, TokenId::$sym_name),)*
        ];

        /// Keyword table: exact ASCII spellings.
        pub const KEYWORDS: &[(&str, TokenId)] = &[
            $(($kw_text, TokenId::$kw_name),)*
        ];

        /// Abstract node kinds and their printed forms.
        pub const ABSTRACTS: &[(&str, TokenId)] = &[
            $(($ab_text, TokenId::$ab_name),)*
        ];

        /// Keywords recognized only when scanning internal test input.
        pub const TEST_KEYWORDS: &[(&str, TokenId)] = &[
            $(($test_text, TokenId::$test_name),)*
        ];
    };
}

define_tokens! {
    symbols {
        Ellipsis   => "...",
        Arrow      => "->",
        DblArrow   => "=>",

        LShift     => "<<",
        RShift     => ">>",

        Eq         => "==",
        Ne         => "!=",

        Le         => "<=",
        Ge         => ">=",

        LBrace     => "{",
        RBrace     => "}",
        LParen     => "(",
        RParen     => ")",
        LSquare    => "[",
        RSquare    => "]",
        Comma      => ",",

        Dot        => ".",
        Tilde      => "~",
        Colon      => ":",
        Semi       => ";",
        Assign     => "=",

        Plus       => "+",
        Minus      => "-",
        Multiply   => "*",
        Divide     => "/",
        Mod        => "%",
        At         => "@",

        Lt         => "<",
        Gt         => ">",

        Pipe       => "|",
        Amp        => "&",
        Ephemeral  => "^",
        Borrowed   => "!",

        Question   => "?",
        UnaryMinus => "-",

        LParenNew  => "(",
        LSquareNew => "[",
        MinusNew   => "-",
    }

    keywords {
        DontCare          => "_",
        CompilerIntrinsic => "compiler_intrinsic",

        Use       => "use",
        Type      => "type",
        Interface => "interface",
        Trait     => "trait",
        Primitive => "primitive",
        Class     => "class",
        Actor     => "actor",
        Object    => "object",
        Lambda    => "lambda",

        As   => "as",
        Is   => "is",
        Isnt => "isnt",

        Var => "var",
        Let => "let",
        New => "new",
        Fun => "fun",
        Be  => "be",

        Iso => "iso",
        Trn => "trn",
        Ref => "ref",
        Val => "val",
        Box => "box",
        Tag => "tag",

        This     => "this",
        Return   => "return",
        Break    => "break",
        Continue => "continue",
        Consume  => "consume",
        Recover  => "recover",

        If     => "if",
        Then   => "then",
        Else   => "else",
        ElseIf => "elseif",
        End    => "end",
        For    => "for",
        In     => "in",
        While  => "while",
        Do     => "do",
        Repeat => "repeat",
        Until  => "until",
        Match  => "match",
        Where  => "where",
        Try    => "try",
        With   => "with",
        Error  => "error",

        Not => "not",
        And => "and",
        Or  => "or",
        Xor => "xor",

        Identity => "identityof",

        True  => "true",
        False => "false",
    }

    abstracts {
        None => "x", // Needed for AST printing

        Program => "program",
        Package => "package",
        Module  => "module",

        Members => "members",
        FVar    => "fvar",
        FLet    => "flet",
        FfiDecl => "ffidecl",
        FfiCall => "fficall",

        Types     => "types",
        UnionType => "uniontype",
        IsectType => "isecttype",
        TupleType => "tupletype",
        Nominal   => "nominal",
        ThisType  => "thistype",
        BoxType   => "boxtype",
        FunType   => "funtype",
        InferType => "infer",
        ErrorType => "errortype",

        IsoBind => "iso",
        TrnBind => "trn",
        RefBind => "ref",
        ValBind => "val",
        BoxBind => "box",
        TagBind => "tag",
        AnyBind => "any",

        BoxGeneric => "boxgen",
        TagGeneric => "taggen",
        AnyGeneric => "anygen",

        Literal         => "literal",
        LiteralBranch   => "branch",
        OperatorLiteral => "opliteral",

        TypeParams     => "typeparams",
        TypeParam      => "typeparam",
        Params         => "params",
        Param          => "param",
        TypeArgs       => "typeargs",
        PositionalArgs => "positionalargs",
        NamedArgs      => "namedargs",
        NamedArg       => "namedarg",
        UpdateArg      => "updatearg",

        Seq     => "seq",
        Qualify => "qualify",
        Call    => "call",
        Tuple   => "tuple",
        Array   => "array",
        Cases   => "cases",
        Case    => "case",
        TryNoCheck => "try",

        Reference    => "reference",
        PackageRef   => "packageref",
        TypeRef      => "typeref",
        TypeParamRef => "typeparamref",
        NewRef       => "newref",
        NewBeRef     => "newberef",
        BeRef        => "beref",
        FunRef       => "funref",
        FVarRef      => "fvarref",
        FLetRef      => "fletref",
        VarRef       => "varref",
        LetRef       => "letref",
        ParamRef     => "paramref",
        NewApp       => "newapp",
        BeApp        => "beapp",
        FunApp       => "funapp",

        NewLine => "\n",

        Test => "test",
    }

    test_keywords {
        TestSeqScope   => "$scope",
        TestSeq        => "$seq",
        TestTryNoCheck => "$try_no_check",
        TestBorrowed   => "$borrowed",
        TestUpdateArg  => "$updatearg",
    }
}

/// Check a scanned identifier against the keyword table.
pub fn lookup_keyword(text: &str) -> Option<TokenId> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|(_, id)| *id)
}

/// Check a scanned `$`-identifier against the test keyword table.
pub fn lookup_test_keyword(text: &str) -> Option<TokenId> {
    TEST_KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|(_, id)| *id)
}

/// Map a textual name to the abstract node kind with that printed form.
/// Returns `TokenId::LexError` when there is no such kind. Used when
/// reading serialized ASTs, not by the scanner.
pub fn abstract_keyword_id(text: &str) -> TokenId {
    ABSTRACTS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|(_, id)| *id)
        .unwrap_or(TokenId::LexError)
}

impl TokenId {
    /// The canonical textual form of this kind, or `None` for kinds with no
    /// fixed spelling (identifiers, literals, end-of-file, lex errors).
    ///
    /// Tables are searched abstracts first, then keywords, symbols and test
    /// keywords. Capability ids appear in both the abstract and keyword
    /// tables with the same text; the abstract entry wins, on purpose.
    pub fn canonical_text(self) -> Option<&'static str> {
        ABSTRACTS
            .iter()
            .chain(KEYWORDS)
            .chain(SYMBOLS)
            .chain(TEST_KEYWORDS)
            .find(|(_, id)| *id == self)
            .map(|(text, _)| *text)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical_text() {
            Some(text) => f.write_str(text),
            Option::None => write!(f, "{:?}", self),
        }
    }
}
