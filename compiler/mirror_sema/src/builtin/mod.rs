//! Fundamental (builtin) types and their spellings.
//!
//! Builtin types have no declaration and no source location. Each one has a
//! single canonical spelling (`unsigned int`, `long long`), while source code
//! may use many equivalent abbreviations (`unsigned`, `long long int`,
//! `int long signed long`). [`BuiltinType::from_spelling`] folds all of those
//! onto the canonical type.

use std::fmt;

use mirror_ir::TypeId;

/// A builtin type. Discriminants are the fixed pool indices.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum BuiltinType {
    Void = 0,
    Bool = 1,
    Char = 2,
    SignedChar = 3,
    UnsignedChar = 4,
    Short = 5,
    UnsignedShort = 6,
    Int = 7,
    UnsignedInt = 8,
    Long = 9,
    UnsignedLong = 10,
    LongLong = 11,
    UnsignedLongLong = 12,
    Float = 13,
    Double = 14,
    LongDouble = 15,
    NullPtr = 16,
}

impl BuiltinType {
    /// All builtins in pool-index order.
    pub const ALL: [BuiltinType; 17] = [
        BuiltinType::Void,
        BuiltinType::Bool,
        BuiltinType::Char,
        BuiltinType::SignedChar,
        BuiltinType::UnsignedChar,
        BuiltinType::Short,
        BuiltinType::UnsignedShort,
        BuiltinType::Int,
        BuiltinType::UnsignedInt,
        BuiltinType::Long,
        BuiltinType::UnsignedLong,
        BuiltinType::LongLong,
        BuiltinType::UnsignedLongLong,
        BuiltinType::Float,
        BuiltinType::Double,
        BuiltinType::LongDouble,
        BuiltinType::NullPtr,
    ];

    /// Canonical spelling.
    pub const fn spelling(self) -> &'static str {
        match self {
            BuiltinType::Void => "void",
            BuiltinType::Bool => "bool",
            BuiltinType::Char => "char",
            BuiltinType::SignedChar => "signed char",
            BuiltinType::UnsignedChar => "unsigned char",
            BuiltinType::Short => "short",
            BuiltinType::UnsignedShort => "unsigned short",
            BuiltinType::Int => "int",
            BuiltinType::UnsignedInt => "unsigned int",
            BuiltinType::Long => "long",
            BuiltinType::UnsignedLong => "unsigned long",
            BuiltinType::LongLong => "long long",
            BuiltinType::UnsignedLongLong => "unsigned long long",
            BuiltinType::Float => "float",
            BuiltinType::Double => "double",
            BuiltinType::LongDouble => "long double",
            BuiltinType::NullPtr => "decltype(nullptr)",
        }
    }

    /// The fixed pool index of this builtin.
    #[inline]
    pub const fn type_id(self) -> TypeId {
        TypeId::from_raw(self as u32)
    }

    /// The builtin stored at `id`, if `id` is a builtin index.
    pub fn from_type_id(id: TypeId) -> Option<BuiltinType> {
        Self::ALL.get(id.index()).copied()
    }

    pub const fn is_integral(self) -> bool {
        !matches!(
            self,
            BuiltinType::Void
                | BuiltinType::Float
                | BuiltinType::Double
                | BuiltinType::LongDouble
                | BuiltinType::NullPtr
        )
    }

    /// Parse a builtin type spelling, accepting every abbreviation and
    /// specifier order the language allows.
    ///
    /// Returns `None` for anything that is not a builtin type, including
    /// contradictory specifiers (`signed unsigned`, `short long`).
    pub fn from_spelling(spelling: &str) -> Option<BuiltinType> {
        let spelling = spelling.trim();
        if matches!(
            spelling,
            "decltype(nullptr)" | "nullptr_t" | "std::nullptr_t"
        ) {
            return Some(BuiltinType::NullPtr);
        }

        let mut spec = Specifiers::default();
        for word in spelling.split_whitespace() {
            spec.add(word)?;
        }
        spec.resolve()
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Specifier counts collected from a builtin spelling.
#[derive(Default)]
struct Specifiers {
    signed: u8,
    unsigned: u8,
    short: u8,
    long: u8,
    int: u8,
    char: u8,
    bool: u8,
    void: u8,
    float: u8,
    double: u8,
}

impl Specifiers {
    fn add(&mut self, word: &str) -> Option<()> {
        let slot = match word {
            "signed" => &mut self.signed,
            "unsigned" => &mut self.unsigned,
            "short" => &mut self.short,
            "long" => &mut self.long,
            "int" => &mut self.int,
            "char" => &mut self.char,
            "bool" => &mut self.bool,
            "void" => &mut self.void,
            "float" => &mut self.float,
            "double" => &mut self.double,
            _ => return None,
        };
        *slot += 1;
        Some(())
    }

    fn sign_and_size_count(&self) -> u8 {
        self.signed + self.unsigned + self.short + self.long
    }

    fn resolve(&self) -> Option<BuiltinType> {
        // `long` is the only specifier that may repeat, and only twice.
        let singles = [
            self.signed,
            self.unsigned,
            self.short,
            self.int,
            self.char,
            self.bool,
            self.void,
            self.float,
            self.double,
        ];
        if singles.iter().any(|&n| n > 1) || self.long > 2 {
            return None;
        }
        if self.signed + self.unsigned > 1 || (self.short > 0 && self.long > 0) {
            return None;
        }

        let lone = |ty: BuiltinType, count: u8, allowed_long: u8| {
            let others = self.sign_and_size_count() + self.int + self.char;
            (count == 1 && others == allowed_long && self.long == allowed_long).then_some(ty)
        };

        if self.void + self.bool + self.float + self.double + self.char > 1 {
            return None;
        }
        if self.void == 1 {
            return lone(BuiltinType::Void, self.void, 0);
        }
        if self.bool == 1 {
            return lone(BuiltinType::Bool, self.bool, 0);
        }
        if self.float == 1 {
            return lone(BuiltinType::Float, self.float, 0);
        }
        if self.double == 1 {
            return match self.long {
                0 => lone(BuiltinType::Double, self.double, 0),
                1 => lone(BuiltinType::LongDouble, self.double, 1),
                _ => None,
            };
        }
        if self.char == 1 {
            if self.short + self.long + self.int > 0 {
                return None;
            }
            return Some(match (self.signed, self.unsigned) {
                (1, _) => BuiltinType::SignedChar,
                (_, 1) => BuiltinType::UnsignedChar,
                _ => BuiltinType::Char,
            });
        }

        if self.sign_and_size_count() + self.int == 0 {
            return None;
        }
        let unsigned = self.unsigned == 1;
        Some(match (self.short, self.long, unsigned) {
            (1, _, false) => BuiltinType::Short,
            (1, _, true) => BuiltinType::UnsignedShort,
            (_, 0, false) => BuiltinType::Int,
            (_, 0, true) => BuiltinType::UnsignedInt,
            (_, 1, false) => BuiltinType::Long,
            (_, 1, true) => BuiltinType::UnsignedLong,
            (_, _, false) => BuiltinType::LongLong,
            (_, _, true) => BuiltinType::UnsignedLongLong,
        })
    }
}
