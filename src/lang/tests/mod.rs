use super::*;


fn kinds(s: &str) -> Vec<TokenKind> {
    lex(s).iter().map(|t| t.kind).collect()
}

fn indexes(s: &str) -> Vec<Option<usize>> {
    lex(s).iter().map(|t| t.index).collect()
}
