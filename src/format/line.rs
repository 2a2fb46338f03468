use crate::operand::{Notation, RegView};

/// Builds one rendered line in either notation.
///
/// Call notation: `__ name(a, b, c);`
/// Assembly notation: `name\ta, b, c` (just `name` without operands)
#[derive(Debug, Clone)]
pub struct Line {
    notation: Notation,
    head: String,
    args: Vec<String>,
}

impl Line {
    /// Picks `call` or `asm` as the head depending on the notation.
    pub fn new(notation: Notation, call: &str, asm: &str) -> Self {
        let head = match notation {
            Notation::Call => call,
            Notation::Asm => asm,
        };
        Self {
            notation,
            head: head.to_string(),
            args: Vec::new(),
        }
    }

    pub fn of(notation: Notation, mnemonic: &Mnemonic) -> Self {
        Self::new(notation, mnemonic.call_name(), mnemonic.asm_name())
    }

    pub fn is_call(&self) -> bool {
        self.notation == Notation::Call
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Adds an argument only in call notation.
    pub fn call_arg(self, arg: impl Into<String>) -> Self {
        if self.is_call() { self.arg(arg) } else { self }
    }

    /// Adds an argument only in assembly notation.
    pub fn asm_arg(self, arg: impl Into<String>) -> Self {
        if self.is_call() { self } else { self.arg(arg) }
    }

    pub fn finish(self) -> String {
        match self.notation {
            Notation::Call => format!("__ {}({});", self.head, self.args.join(", ")),
            Notation::Asm if self.args.is_empty() => self.head,
            Notation::Asm => format!("{}\t{}", self.head, self.args.join(", ")),
        }
    }
}

/// Internal instruction name and the two spellings derived from it.
///
/// A trailing `w` marks the 32-bit variant and a trailing `i` an immediate
/// variant; neither is part of the assembler mnemonic. Names whose `i` is
/// part of the real mnemonic (`wfi`, `xpaci`) are postfix exceptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mnemonic {
    name: &'static str,
    postfix_exception: bool,
}

impl Mnemonic {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            postfix_exception: false,
        }
    }

    pub const fn postfix(name: &'static str) -> Self {
        Self {
            name,
            postfix_exception: true,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_word(&self) -> bool {
        self.name.ends_with('w') || self.name.ends_with("wi")
    }

    /// General-register view of the instruction's operands.
    pub fn view(&self) -> RegView {
        RegView::general(self.is_word())
    }

    /// `and` is a reserved word on the encoder side.
    pub fn call_name(&self) -> &'static str {
        if self.name == "and" { "andr" } else { self.name }
    }

    pub fn asm_name(&self) -> &'static str {
        let name = self.name;
        if self.postfix_exception {
            name
        } else if let Some(stem) = name.strip_suffix("wi") {
            stem
        } else if let Some(stem) = name.strip_suffix('i').or_else(|| name.strip_suffix('w')) {
            stem
        } else {
            name
        }
    }
}
