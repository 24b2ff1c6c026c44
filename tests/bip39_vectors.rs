//! BIP39 known test vectors and boundary cases.
//!
//! Vectors sourced from the TREZOR reference set:
//! <https://github.com/trezor/python-mnemonic/blob/master/vectors.json>

use dice_mnemonic::{
    decode, encode, DecodeError, Entropy, EntropyError, MockQrCodec, QrCodec, Wordlist,
};

fn check_vector(entropy_hex: &str, expected: &str) {
    let wordlist = Wordlist::english();
    let entropy = Entropy::from_bytes(hex::decode(entropy_hex).unwrap()).unwrap();

    let mnemonic = encode(&entropy, wordlist);
    assert_eq!(mnemonic.as_str(), expected, "encode of {entropy_hex}");

    let recovered = decode(expected, wordlist).unwrap();
    assert_eq!(recovered, entropy, "decode of {expected:?}");
}

// ===================================================================
// 128-bit entropy (12 words)
// ===================================================================

#[test]
fn vector_128_zero() {
    check_vector(
        "00000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon about",
    );
}

#[test]
fn vector_128_7f() {
    check_vector(
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful \
         legal winner thank yellow",
    );
}

#[test]
fn vector_128_80() {
    check_vector(
        "80808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid \
         letter advice cage above",
    );
}

#[test]
fn vector_128_ff() {
    check_vector(
        "ffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
    );
}

#[test]
fn vector_128_mixed() {
    check_vector(
        "9e885d952ad362caeb4efe34a8e91bd2",
        "ozone drill grab fiber curtain grace pudding thank \
         cruise elder eight picnic",
    );
}

#[test]
fn vector_128_mixed_2() {
    check_vector(
        "f30f8c1da665478f49b001d94c5fc452",
        "vessel ladder alter error federal sibling chat \
         ability sun glass valve picture",
    );
}

#[test]
fn vector_128_mixed_3() {
    check_vector(
        "0c1e24e5917779d297e14d45f14e1a1a",
        "army van defense carry jealous true \
         garbage claim echo media make crunch",
    );
}

// ===================================================================
// 160-bit entropy (15 words)
// ===================================================================

#[test]
fn vector_160_zero() {
    check_vector(
        "0000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon abandon abandon address",
    );
}

// ===================================================================
// 192-bit entropy (18 words)
// ===================================================================

#[test]
fn vector_192_zero() {
    check_vector(
        "000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon agent",
    );
}

#[test]
fn vector_192_ff() {
    check_vector(
        "ffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo \
         zoo zoo zoo zoo zoo when",
    );
}

#[test]
fn vector_192_mixed() {
    check_vector(
        "6610b25967cdcca9d59875f5cb50b0ea75433311869e930b",
        "gravity machine north sort system female filter attitude \
         volume fold club stay feature office ecology stable narrow fog",
    );
}

// ===================================================================
// 224-bit entropy (21 words)
// ===================================================================

#[test]
fn vector_224_ff() {
    check_vector(
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo \
         zoo zoo zoo zoo zoo zoo zoo zoo veteran",
    );
}

// ===================================================================
// 256-bit entropy (24 words)
// ===================================================================

#[test]
fn vector_256_zero() {
    check_vector(
        "0000000000000000000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon art",
    );
}

#[test]
fn vector_256_7f() {
    check_vector(
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful \
         legal winner thank year wave sausage worth useful \
         legal winner thank year wave sausage worth title",
    );
}

#[test]
fn vector_256_80() {
    check_vector(
        "8080808080808080808080808080808080808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid \
         letter advice cage absurd amount doctor acoustic avoid \
         letter advice cage absurd amount doctor acoustic bless",
    );
}

#[test]
fn vector_256_ff() {
    check_vector(
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo \
         zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
    );
}

#[test]
fn vector_256_mixed() {
    check_vector(
        "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c",
        "hamster diagram private dutch cause delay private meat \
         slide toddler razor book happy fancy gospel tennis maple \
         dilemma loan word shrug inflict delay length",
    );
}

// ===================================================================
// Validation boundaries
// ===================================================================

#[test]
fn entropy_length_boundaries() {
    for bytes in [15, 17, 33] {
        assert_eq!(
            Entropy::from_bytes(vec![0u8; bytes]),
            Err(EntropyError::InvalidLength(bytes))
        );
    }
    for bytes in [16, 20, 24, 28, 32] {
        assert!(Entropy::from_bytes(vec![0u8; bytes]).is_ok());
    }
}

#[test]
fn word_count_boundaries() {
    let wordlist = Wordlist::english();
    for count in [13, 16] {
        let phrase = vec!["abandon"; count].join(" ");
        assert_eq!(
            decode(&phrase, wordlist),
            Err(DecodeError::InvalidWordCount(count))
        );
    }
}

#[test]
fn unknown_word_names_word_and_position() {
    let wordlist = Wordlist::english();
    let phrase = "abandon abandon abandon abandon abandon zzzz \
                  abandon abandon abandon abandon abandon about";
    assert_eq!(
        decode(phrase, wordlist),
        Err(DecodeError::UnknownWord {
            word: "zzzz".to_string(),
            position: 5,
        })
    );
}

#[test]
fn single_word_substitution_never_decodes_silently() {
    let wordlist = Wordlist::english();
    let entropy = Entropy::from_bytes(hex::decode("9e885d952ad362caeb4efe34a8e91bd2").unwrap())
        .unwrap();
    let mnemonic = encode(&entropy, wordlist);
    let words: Vec<&str> = mnemonic.words().collect();

    // Swap each word for a different valid word and expect rejection
    for position in 0..words.len() {
        let mut mutated = words.clone();
        mutated[position] = if words[position] == "abandon" {
            "ability"
        } else {
            "abandon"
        };
        let phrase = mutated.join(" ");
        match decode(&phrase, wordlist) {
            Err(DecodeError::ChecksumMismatch) => {}
            Ok(decoded) => {
                // A substitution can only be accepted if it collides on
                // the checksum, and then it must decode differently.
                assert_ne!(decoded, entropy, "silent wrong decode at {position}");
            }
            Err(other) => panic!("unexpected error at {position}: {other}"),
        }
    }
}

// ===================================================================
// QR boundary
// ===================================================================

#[test]
fn qr_mock_roundtrip_carries_entropy() {
    let wordlist = Wordlist::english();
    let codec = MockQrCodec::new();

    let entropy = Entropy::from_bytes(hex::decode("9e885d952ad362caeb4efe34a8e91bd2").unwrap())
        .unwrap();
    let image = codec.encode(entropy.as_bytes()).unwrap();
    let payload = codec.decode(&image).unwrap();

    let recovered = Entropy::from_bytes(payload).unwrap();
    let mnemonic = encode(&recovered, wordlist);
    assert_eq!(
        mnemonic.as_str(),
        "ozone drill grab fiber curtain grace pudding thank \
         cruise elder eight picnic"
    );
}

#[test]
fn qr_payload_of_wrong_length_is_rejected() {
    let codec = MockQrCodec::new();
    let image = codec.encode(&[0u8; 17]).unwrap();
    let payload = codec.decode(&image).unwrap();
    assert_eq!(
        Entropy::from_bytes(payload),
        Err(EntropyError::InvalidLength(17))
    );
}
