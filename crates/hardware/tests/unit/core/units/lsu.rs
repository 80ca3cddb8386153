//! Load/Store Unit Tests.

use mips_core::common::ExceptionCause;
use mips_core::core::pipeline::signals::MemWidth;
use mips_core::core::units::lsu::Lsu;
use rstest::rstest;

#[rstest]
#[case(0x0, MemWidth::Word, true)]
#[case(0x2, MemWidth::Word, false)]
#[case(0x3, MemWidth::Word, false)]
#[case(0x2, MemWidth::Half, true)]
#[case(0x1, MemWidth::Half, false)]
#[case(0x3, MemWidth::Byte, true)]
fn natural_alignment(#[case] addr: u32, #[case] width: MemWidth, #[case] aligned: bool) {
    let result = Lsu::check(addr, width);
    if aligned {
        assert!(result.is_ok(), "{width:?} at {addr:#x} is aligned");
    } else {
        assert_eq!(
            result.err(),
            Some(ExceptionCause::MisalignedAccess { address: addr })
        );
    }
}

#[rstest]
#[case(0x80, MemWidth::Byte, false, 0xFFFF_FF80)]
#[case(0x80, MemWidth::Byte, true, 0x0000_0080)]
#[case(0x7F, MemWidth::Byte, false, 0x0000_007F)]
#[case(0x8000, MemWidth::Half, false, 0xFFFF_8000)]
#[case(0x8000, MemWidth::Half, true, 0x0000_8000)]
#[case(0x8000_0000, MemWidth::Word, false, 0x8000_0000)]
fn load_extension(
    #[case] raw: u32,
    #[case] width: MemWidth,
    #[case] unsigned: bool,
    #[case] expected: u32,
) {
    assert_eq!(Lsu::extend_load(raw, width, unsigned), expected);
}
