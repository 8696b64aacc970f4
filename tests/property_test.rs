mod common;
use common::*;
use proptest::prelude::*;
use rooster::mach::{Opcode, Program, Word};
use rooster::program;

fn binary(a: Word, b: Word, op: Opcode) -> Program {
    let mut program = program![Iconst, (a), Iconst, (b)];
    program.push(op);
    program.push(Opcode::Halt);
    program
}

proptest! {
    #[test]
    fn iconst_leaves_one_value(v in any::<i64>()) {
        let r = exec(program![Iconst, (v), Halt]);
        prop_assert_eq!(r.stack().as_slice(), &[v]);
    }

    #[test]
    fn add_and_mul_commute(a in any::<i64>(), b in any::<i64>()) {
        for op in [Opcode::Iadd, Opcode::Imul] {
            let ab = exec(binary(a, b, op));
            let ba = exec(binary(b, a, op));
            prop_assert_eq!(top(&ab), top(&ba));
        }
    }

    #[test]
    fn comparisons_are_zero_or_one(a in any::<i64>(), b in any::<i64>()) {
        for op in [Opcode::Ilt, Opcode::Ieq] {
            let r = exec(binary(a, b, op));
            prop_assert!(top(&r) == 0 || top(&r) == 1);
            prop_assert_eq!(r.stack().len(), 1);
        }
    }

    #[test]
    fn equal_operands(a in any::<i64>()) {
        prop_assert_eq!(top(&exec(binary(a, a, Opcode::Ilt))), 0);
        prop_assert_eq!(top(&exec(binary(a, a, Opcode::Ieq))), 1);
    }

    #[test]
    fn print_pops_only_the_top(values in prop::collection::vec(any::<i64>(), 1..16)) {
        let mut program = Program::new();
        for v in values.iter() {
            program.push(Opcode::Iconst);
            program.push(*v);
        }
        program.push(Opcode::Print);
        program.push(Opcode::Halt);
        let r = exec(program);
        prop_assert_eq!(r.stack().as_slice(), &values[..values.len() - 1]);
        prop_assert_eq!(printed(&r), format!("{}\n", values[values.len() - 1]));
    }

    #[test]
    fn store_then_load(v in any::<i64>(), k in 0i64..256, before in 0i64..256) {
        let r = exec(program![Iconst, 0, Gstore, (before), Iconst, (v), Gstore, (k), Gload, (k), Halt]);
        prop_assert_eq!(top(&r), v);
        prop_assert_eq!(r.locals().len() as i64, k.max(before) + 1);
    }

    #[test]
    fn jmp_skips(skipped in 0usize..8) {
        let mut program = program![Iconst, 1, Jmp];
        program.push((4 + 2 * skipped) as Word);
        for _ in 0..skipped {
            program.push(Opcode::Iconst);
            program.push(9);
        }
        program.push(Opcode::Iconst);
        program.push(2);
        program.push(Opcode::Halt);
        let r = exec(program);
        prop_assert_eq!(r.stack().as_slice(), &[1, 2]);
    }
}
