use super::*;

#[test]
fn test_macro() {
    let p = crate::program![Iconst, 42, Iconst, (-1), Halt];
    assert_eq!(p.words(), &[1, 42, 1, -1, 15]);
}

#[test]
fn test_parse_listing() {
    let p: Program = "# answer\nICONST 42, PRINT\n  15 # halt\n".parse().unwrap();
    assert_eq!(p, crate::program![Iconst, 42, Print, Halt]);
}

#[test]
fn test_parse_negative() {
    let p: Program = "ICONST -5".parse().unwrap();
    assert_eq!(p.words(), &[1, -5]);
}

#[test]
fn test_parse_error() {
    let e = "ICONST 1\nJMP loop\n".parse::<Program>().unwrap_err();
    assert_eq!(
        e,
        ParseError {
            line: 2,
            word: "loop".to_string()
        }
    );
    assert_eq!(e.to_string(), "INVALID WORD 'loop' IN LINE 2");
}

#[test]
fn test_disassemble() {
    let p = crate::program![Iconst, 4, Jmp, 5, 99, Halt, Gstore];
    assert_eq!(
        p.to_string(),
        "0000 ICONST 4\n0002 JMP 5\n0004 .word 99\n0005 HALT\n0006 GSTORE ?\n"
    );
}
