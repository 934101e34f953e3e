use crate::{Word, assemble_source};

// A countdown loop using every supported operation.
const PROGRAM_COUNTDOWN: &str = "\
lh   x1, 0(x10)      # counter
andi x1, x1, 255
lh   x2, 2(x10)      # step
sll  x3, x2, x4
or   x5, x5, x3
add  x1, x1, x2
sh   x1, 0(x10)
bne  x1, x0, -24
";

const EXPECTED_COUNTDOWN: [&str; 8] = [
    // opcode rs1   f3  rd    imm
    "0000011_01010_010_00001_000000000000",
    "0010011_00001_111_00001_000011111111",
    "0000011_01010_010_00010_000000000010",
    // opcode rs1   rs2   f3  rd    zeros
    "0110011_00010_00100_001_00011_0000000",
    "0110011_00101_00011_110_00101_0000000",
    "0110011_00001_00010_000_00001_0000000",
    // opcode rs1   f3  rd    imm
    "0100011_01010_010_00000_000000000000",
    // opcode rs1   rs2   f3  imm
    "1100011_00001_00000_001_111111101000",
];

#[test]
fn test_assemble_countdown() {
    let listing = assemble_source(PROGRAM_COUNTDOWN);
    assert!(!listing.has_errors());
    let binaries: Vec<_> = listing.binaries().collect();
    let expected: Vec<_> = EXPECTED_COUNTDOWN
        .iter()
        .map(|w| w.replace('_', ""))
        .collect();
    assert_eq!(binaries, expected);

    // Every word reads back as the line it came from, up to spacing and
    // comments. The store loses its data register.
    for (line, binary) in PROGRAM_COUNTDOWN.lines().zip(&binaries) {
        let insn = Word::from_binary(binary).unwrap().disassemble().unwrap();
        let source = crate::strip_comment(line).split_whitespace().collect::<Vec<_>>().join(" ");
        if line.starts_with("sh") {
            assert_eq!(insn.to_string(), "sh x0, 0(x10)");
        } else {
            assert_eq!(insn.to_string(), source);
        }
    }
}
