//! Offset resolution tests
//!
//! These tests check the resolver contract across every known architecture: registered
//! layouts are monotonic and bounded, everything else is a domain error.

use std::thread;

use scarg::arch::SYSCALL_ARG_COUNT;
use scarg::{arg_offset, arg_offset_hi, arg_offset_lo, ArchDef, ArchToken, DomainError};

const REGISTERED: [ArchDef; 2] = [ArchDef::I386, ArchDef::X86_64];
const UNREGISTERED: [ArchDef; 2] = [ArchDef::AARCH64, ArchDef::ARM];

#[test]
fn i386_scenario() {
    assert_eq!(arg_offset(&ArchDef::I386, 0), Ok(4));
    assert_eq!(arg_offset(&ArchDef::I386, 1), Ok(8));
    assert_eq!(
        arg_offset(&ArchDef::I386, 6),
        Err(DomainError::ArgOutOfRange {
            token: ArchToken::I386,
            arg: 6,
            max: 5
        })
    );
}

#[test]
fn offsets_strictly_increase() {
    let resolvers: [fn(&ArchDef, u32) -> Result<u32, DomainError>; 2] =
        [arg_offset, arg_offset_lo];
    for arch in REGISTERED {
        for resolve in resolvers {
            let offsets: Vec<u32> = (0..SYSCALL_ARG_COUNT)
                .map(|arg| resolve(&arch, arg).unwrap())
                .collect();
            assert!(
                offsets.windows(2).all(|w| w[0] < w[1]),
                "{}: {:?}",
                arch,
                offsets
            );
        }
    }
}

#[test]
fn one_past_the_end_is_rejected() {
    for arch in REGISTERED {
        assert!(matches!(
            arg_offset(&arch, SYSCALL_ARG_COUNT),
            Err(DomainError::ArgOutOfRange { .. })
        ));
        assert!(matches!(
            arg_offset_lo(&arch, SYSCALL_ARG_COUNT),
            Err(DomainError::ArgOutOfRange { .. })
        ));
    }
}

#[test]
fn unregistered_architectures_always_fail() {
    for arch in UNREGISTERED {
        for arg in 0..=SYSCALL_ARG_COUNT {
            let expected = Err(DomainError::UnsupportedArch(arch.token));
            assert_eq!(arg_offset(&arch, arg), expected);
            assert_eq!(arg_offset_lo(&arch, arg), expected);
            assert_eq!(arg_offset_hi(&arch, arg), expected);
        }
    }
}

// Adding a high-half layout for any architecture must update this test.
#[test]
fn high_half_is_undefined_everywhere() {
    for token in ArchToken::ALL {
        let arch = ArchDef::from_token(token);
        for arg in 0..SYSCALL_ARG_COUNT {
            let err = arg_offset_hi(&arch, arg).unwrap_err();
            assert_eq!(err.errno(), -33);
        }
    }
    assert_eq!(
        arg_offset_hi(&ArchDef::I386, 0),
        Err(DomainError::NoHighHalf(ArchToken::I386))
    );
}

#[test]
fn native_descriptor_resolves_or_fails_cleanly() {
    let native = ArchDef::native();
    let res = arg_offset(native, 0);
    match native.token {
        ArchToken::I386 | ArchToken::X86_64 => assert!(res.is_ok()),
        token => assert_eq!(res, Err(DomainError::UnsupportedArch(token))),
    }
}

#[test]
fn concurrent_calls_agree() {
    let expected: Vec<_> = ArchToken::ALL
        .into_iter()
        .flat_map(|token| {
            let arch = ArchDef::from_token(token);
            (0..=SYSCALL_ARG_COUNT)
                .map(move |arg| (arg_offset(&arch, arg), arg_offset_lo(&arch, arg)))
        })
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                ArchToken::ALL
                    .into_iter()
                    .flat_map(|token| {
                        let arch = ArchDef::from_token(token);
                        (0..=SYSCALL_ARG_COUNT)
                            .map(move |arg| (arg_offset(&arch, arg), arg_offset_lo(&arch, arg)))
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
