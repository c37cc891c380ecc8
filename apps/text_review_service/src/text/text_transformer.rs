use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    Uppercase,
    Lowercase,
    Reverse,
    Count,
    Hello,
}

impl Transformation {
    pub fn apply(self, text: &str) -> String {
        match self {
            Transformation::Uppercase => text.to_uppercase(),
            Transformation::Lowercase => text.to_lowercase(),
            Transformation::Reverse => text.chars().rev().collect(),
            Transformation::Count => {
                let (words, characters) = count_words_and_characters(text);
                format!("Word Count: {words}, Character Count: {characters}")
            }
            Transformation::Hello => "Hello".to_string(),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Transformation::Uppercase => "uppercase",
            Transformation::Lowercase => "lowercase",
            Transformation::Reverse => "reverse",
            Transformation::Count => "count",
            Transformation::Hello => "hello",
        };
        f.write_str(name)
    }
}

/// Words split on whitespace and the ASCII separators `\x1c`..=`\x1f`;
/// characters exclude only the ASCII space.
pub fn count_words_and_characters(text: &str) -> (usize, usize) {
    let words = text
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count();
    let characters = text.chars().filter(|c| *c != ' ').count();
    (words, characters)
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
