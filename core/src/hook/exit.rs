use super::types::Decision;

pub const EXIT_OK: i32 = 0;
/// Hosts treat this code as "refuse the tool call".
pub const EXIT_BLOCK: i32 = 2;

pub fn exit_code(decision: &Decision) -> i32 {
    if decision.is_block() {
        EXIT_BLOCK
    } else {
        EXIT_OK
    }
}
