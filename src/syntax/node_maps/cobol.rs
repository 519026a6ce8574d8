use crate::syntax::Category::{self, *};

pub const COBOL: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (String, &["string_literal"]),
    (
        Keyword,
        &[
            "PERFORM",
            "IF",
            "ELSE",
            "END",
            "MOVE",
            "DISPLAY",
            "ACCEPT",
            "ADD",
            "SUBTRACT",
            "MULTIPLY",
            "DIVIDE",
            "COMPUTE",
            "EVALUATE",
            "WHEN",
            "CALL",
            "GO",
            "TO",
            "STOP",
            "RUN",
            "READ",
            "WRITE",
            "OPEN",
            "CLOSE",
            "SECTION",
            "DIVISION",
            "PROGRAM",
            "DATA",
            "WORKING",
            "STORAGE",
            "FILE",
            "PROCEDURE",
            "IDENTIFICATION",
            "ENVIRONMENT",
            "CONFIGURATION",
            "INPUT",
            "OUTPUT",
            "SELECT",
            "ASSIGN",
            "ORGANIZATION",
            "ACCESS",
            "RECORD",
            "PIC",
            "PICTURE",
            "VALUE",
            "OCCURS",
            "TIMES",
            "THRU",
            "THROUGH",
            "VARYING",
            "FROM",
            "BY",
            "UNTIL",
            "WITH",
            "TEST",
            "BEFORE",
            "AFTER",
            "RETURNING",
            "GIVING",
            "USING",
            "NOT",
            "AND",
            "OR",
            "GREATER",
            "LESS",
            "EQUAL",
            "THAN",
        ],
    ),
    (Number, &["number"]),
    (Variable, &["identifier"]),
    (Builtin, &["ZERO", "ZEROS", "ZEROES", "SPACE", "SPACES", "LOW-VALUE", "HIGH-VALUE"]),
];
