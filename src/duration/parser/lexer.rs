use logos::Logos;

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \r\t\n\f]+")] // Ignore this regex pattern between tokens
pub enum Token<'a> {
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex("[a-zA-Z]+", |lex| lex.slice())]
    Word(&'a str),
}

pub fn tokenize_duration(s: &str) -> impl Iterator<Item = Result<Token<'_>, ()>> + '_ {
    let lexer = Token::lexer(s);
    lexer.into_iter()
}
