#[path = "../common/mod.rs"]
mod common;

use libntag::protocol::Command;
use libntag::protocol::codec::encode_command_frame;

#[test]
fn wire_bytes_match_reader_commands() {
    assert_eq!(
        encode_command_frame(&Command::GetVersion).unwrap(),
        common::fixtures::get_version_frame()
    );
    assert_eq!(
        encode_command_frame(&Command::Read { page: 0x03 }).unwrap(),
        common::fixtures::read_frame(0x03)
    );
}

#[test]
fn read_command_encode() {
    let cmd = Command::Read { page: 0x10 };
    let payload = cmd.encode();
    assert_eq!(payload[0], cmd.command_code());
    assert_eq!(payload[1], 0x10);
    assert_eq!(payload.len(), 2);
}
