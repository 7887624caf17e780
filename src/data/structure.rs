//! Division counts per regional command.

use crate::domain::RegionalCommand;

pub fn regional_commands() -> Vec<RegionalCommand> {
    // (command, armored, mechanized, infantry, special forces)
    let rows: [(&str, u32, u32, u32, u32); 6] = [
        ("Northern Command", 3, 2, 4, 2),
        ("Central Command", 2, 2, 3, 1),
        ("Southern Command", 1, 1, 2, 1),
        ("Western Command", 1, 1, 2, 1),
        ("Eastern Command", 2, 1, 3, 1),
        ("Sinai Command", 1, 1, 2, 1),
    ];

    rows.iter()
        .map(|&(name, armored, mechanized, infantry, special_forces)| RegionalCommand {
            name: name.to_string(),
            armored,
            mechanized,
            infantry,
            special_forces,
        })
        .collect()
}
