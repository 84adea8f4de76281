// Emission defaults
pub const DEFAULT_INDENT: usize = 2;
pub const MAX_INDENT: usize = 16;
pub const DEFAULT_PLACEHOLDER: &str = "// Insert your code here";

// Environment overrides for Config::from_env
pub const ENV_INDENT: &str = "OOPGEN_INDENT";
pub const ENV_PLACEHOLDER: &str = "OOPGEN_PLACEHOLDER";
pub const ENV_NO_DOCS: &str = "OOPGEN_NO_DOCS";

// Registry: safety cap on rename attempts while searching for a free name
pub const REGISTRY_MAX_RENAME_STEPS: usize = 100_000;

// Names that can never be emitted verbatim as a class or interface name
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while",
    // literal values
    "false", "null", "true",
];
