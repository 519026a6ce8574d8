use crate::syntax::Category::{self, *};

pub const PASCAL: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (String, &["string"]),
    (
        Keyword,
        &[
            "kBegin",
            "kEnd",
            "kIf",
            "kThen",
            "kElse",
            "kFor",
            "kTo",
            "kDownto",
            "kWhile",
            "kRepeat",
            "kUntil",
            "kDo",
            "kCase",
            "kOf",
            "kWith",
            "kFunction",
            "kProcedure",
            "kProgram",
            "kUnit",
            "kInterface",
            "kImplementation",
            "kVar",
            "kConst",
            "kType",
            "kArray",
            "kRecord",
            "kSet",
            "kFile",
            "kClass",
            "kObject",
            "kConstructor",
            "kDestructor",
            "kProperty",
            "kInherited",
            "kPrivate",
            "kProtected",
            "kPublic",
            "kPublished",
            "kVirtual",
            "kOverride",
            "kAbstract",
            "kStatic",
            "kForward",
            "kExternal",
            "kUses",
            "kIn",
            "kNil",
            "kNot",
            "kAnd",
            "kOr",
            "kXor",
            "kDiv",
            "kMod",
            "kShl",
            "kShr",
            "kAs",
            "kIs",
            "kTry",
            "kExcept",
            "kFinally",
            "kRaise",
            "kOn",
            "kGoto",
            "kLabel",
            "kExit",
            "kBreak",
            "kContinue",
        ],
    ),
    (Number, &["integer", "real", "hex"]),
    (Variable, &["identifier"]),
    (Type, &["type_identifier"]),
    (Builtin, &["kTrue", "kFalse"]),
];
