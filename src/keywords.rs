use {
    crate::token::Kind,
    maplit::hashmap,
    std::{collections::HashMap, sync::OnceLock},
};

type Table = HashMap<&'static str, Kind>;

fn reserved() -> &'static Table {
    static RESERVED: OnceLock<Table> = OnceLock::new();
    RESERVED.get_or_init(|| {
        hashmap! {
            "image" => Kind::KwImage,
            "pixel" => Kind::KwPixel,
            "int" => Kind::KwInt,
            "string" => Kind::KwString,
            "void" => Kind::KwVoid,
            "boolean" => Kind::KwBoolean,
            "write" => Kind::KwWrite,
            "height" => Kind::KwHeight,
            "width" => Kind::KwWidth,
            "if" => Kind::KwIf,
            "fi" => Kind::KwFi,
            "do" => Kind::KwDo,
            "od" => Kind::KwOd,
            "red" => Kind::KwRed,
            "green" => Kind::KwGreen,
            "blue" => Kind::KwBlue,
        }
    })
}

fn constants() -> &'static Table {
    static CONSTANTS: OnceLock<Table> = OnceLock::new();
    CONSTANTS.get_or_init(|| {
        hashmap! {
            "Z" => Kind::Const,
            "BLACK" => Kind::Const,
            "BLUE" => Kind::Const,
            "CYAN" => Kind::Const,
            "DARK_GRAY" => Kind::Const,
            "GRAY" => Kind::Const,
            "GREEN" => Kind::Const,
            "LIGHT_GRAY" => Kind::Const,
            "MAGENTA" => Kind::Const,
            "ORANGE" => Kind::Const,
            "PINK" => Kind::Const,
            "RED" => Kind::Const,
            "WHITE" => Kind::Const,
            "YELLOW" => Kind::Const,
        }
    })
}

fn booleans() -> &'static Table {
    static BOOLEANS: OnceLock<Table> = OnceLock::new();
    BOOLEANS.get_or_init(|| {
        hashmap! {
            "TRUE" => Kind::BooleanLit,
            "FALSE" => Kind::BooleanLit,
        }
    })
}

/// Kind of a finished identifier. Reserved words win over constants, which
/// win over boolean literals.
pub fn classify(lexeme: &str) -> Kind {
    reserved()
        .get(lexeme)
        .or_else(|| constants().get(lexeme))
        .or_else(|| booleans().get(lexeme))
        .copied()
        .unwrap_or(Kind::Ident)
}
