//! Shared SubjectPublicKeyInfo parsing.
//!
//! Public keys arrive as a PKIX SPKI blob whose algorithm identifier decides
//! the concrete type. Parsing happens once, here, and yields a typed
//! [`PublicKey`] variant; each adapter matches only the variant it expects
//! instead of inspecting a generic parsed key at run time.

use std::fmt::{Display, Formatter};

use spki::der::Decode as _;
use spki::{DecodePublicKey as _, ObjectIdentifier, SubjectPublicKeyInfoRef};

use crate::ecdsa::EcdsaPublicKey;
use crate::error::{Error, Result};

pub(crate) const OID_RSA_ENCRYPTION: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
pub(crate) const OID_EC_PUBLIC_KEY: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
pub(crate) const OID_SECP256R1: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
pub(crate) const OID_SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// A named elliptic curve supported by the ECDSA adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedCurve {
    P256,
    P384,
}

impl NamedCurve {
    /// The curve order bit size a raw scalar must match exactly.
    pub fn bit_size(&self) -> usize {
        match self {
            NamedCurve::P256 => 256,
            NamedCurve::P384 => 384,
        }
    }

    /// The byte width of one field element.
    pub fn field_size(&self) -> usize {
        self.bit_size() / 8
    }

    pub(crate) fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        if *oid == OID_SECP256R1 {
            Some(NamedCurve::P256)
        } else if *oid == OID_SECP384R1 {
            Some(NamedCurve::P384)
        } else {
            None
        }
    }
}

impl Display for NamedCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NamedCurve::P256 => write!(f, "P-256"),
            NamedCurve::P384 => write!(f, "P-384"),
        }
    }
}

/// A public key parsed from a SubjectPublicKeyInfo.
#[derive(Debug, Clone, PartialEq)]
pub enum PublicKey {
    Rsa(rsa::RsaPublicKey),
    Ecdsa(EcdsaPublicKey),
}

impl PublicKey {
    pub fn is_rsa(&self) -> bool {
        matches!(self, PublicKey::Rsa(_))
    }

    pub fn is_ecdsa(&self) -> bool {
        matches!(self, PublicKey::Ecdsa(_))
    }

    pub fn into_rsa(self) -> Option<rsa::RsaPublicKey> {
        match self {
            PublicKey::Rsa(key) => Some(key),
            _ => None,
        }
    }

    pub fn into_ecdsa(self) -> Option<EcdsaPublicKey> {
        match self {
            PublicKey::Ecdsa(key) => Some(key),
            _ => None,
        }
    }
}

/// Parses a DER-encoded SubjectPublicKeyInfo into its typed variant.
///
/// # Errors
///
/// Unknown algorithms fail with [`Error::UnknownPublicKeyType`]; EC keys on
/// a curve outside the supported set fail with [`Error::UnsupportedCurve`].
pub fn parse_public_key(der: &[u8]) -> Result<PublicKey> {
    let info = SubjectPublicKeyInfoRef::from_der(der)?;
    if info.algorithm.oid == OID_RSA_ENCRYPTION {
        Ok(PublicKey::Rsa(rsa::RsaPublicKey::from_public_key_der(der)?))
    } else if info.algorithm.oid == OID_EC_PUBLIC_KEY {
        let curve_oid = info.algorithm.parameters_oid()?;
        match NamedCurve::from_oid(&curve_oid) {
            Some(NamedCurve::P256) => Ok(PublicKey::Ecdsa(EcdsaPublicKey::P256(
                p256::PublicKey::from_public_key_der(der)?,
            ))),
            Some(NamedCurve::P384) => Ok(PublicKey::Ecdsa(EcdsaPublicKey::P384(
                p384::PublicKey::from_public_key_der(der)?,
            ))),
            None => Err(Error::UnsupportedCurve),
        }
    } else {
        Err(Error::UnknownPublicKeyType)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // P-256 public key, X.509/SPKI form
    const EC_P256_SPKI_PUB: &str = r"-----BEGIN PUBLIC KEY-----
MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEmvfw1VdwIlsJHfbHLhHXrO3Wq/0L
BCduo6Nb96AiLGUxkn/OWt1I9STYYNw8e/Xuzsy9j5joSxQDwmCWSGPGWw==
-----END PUBLIC KEY-----";

    // RSA 2048 public key, X.509/SPKI form
    const RSA_2048_SPKI_PUB: &str = r"-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAvf4anqhlMYhVhpOv8XK/
ygPFUxkNa8Rh9NNTVlqiWuPgD4Lj7YCsa31kQwYgOKADsG5ROApHSjKsWrKQ70DS
pxZmPiO8j7jFQdUJLbe/hfiFskoMUr+V5imxrkJB5cnBgIw49ykn0mVtyLRG9RS8
Xv+XqNEHFnugS7z2cFQqKYI8oq2LyLxSbMzDlzkB1p64u5p6Gy0W3KQZt42/somp
o+swMslw+XN2rSNFfUWfJWGdEFJcSl+9oOz7y9ZGv56uC3VdGnU9u6MmC3iMZ/Vf
9qQIHOr6KE6IaJNvHPSAET7qnBWJq+x0UrsMJmGdkjGvE3MgIjgaLxjgn/sfO1++
vwIDAQAB
-----END PUBLIC KEY-----";

    // Ed25519 SPKI: well-formed, but not an algorithm any adapter handles
    const ED25519_SPKI_HEX: &str =
        "302a300506032b65700321009d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    fn spki_der(pem_str: &str) -> Vec<u8> {
        pem_str.parse::<pem::Block>().unwrap().decode().unwrap()
    }

    #[test]
    fn test_parse_rsa() {
        let key = parse_public_key(&spki_der(RSA_2048_SPKI_PUB)).unwrap();
        assert!(key.is_rsa());
        assert!(key.into_rsa().is_some());
    }

    #[test]
    fn test_parse_ecdsa() {
        let key = parse_public_key(&spki_der(EC_P256_SPKI_PUB)).unwrap();
        assert!(key.is_ecdsa());
        let key = key.into_ecdsa().unwrap();
        assert_eq!(NamedCurve::P256, key.curve());
    }

    #[test]
    fn test_parse_unknown_algorithm() {
        let der = hex::decode(ED25519_SPKI_HEX).unwrap();
        assert!(matches!(
            parse_public_key(&der),
            Err(Error::UnknownPublicKeyType)
        ));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse_public_key(&[0x30, 0x00]), Err(Error::Der(_))));
    }

    #[rstest(
        oid,
        expected,
        case(OID_SECP256R1, Some(NamedCurve::P256)),
        case(OID_SECP384R1, Some(NamedCurve::P384)),
        case(OID_EC_PUBLIC_KEY, None)
    )]
    fn test_named_curve_from_oid(oid: ObjectIdentifier, expected: Option<NamedCurve>) {
        assert_eq!(expected, NamedCurve::from_oid(&oid));
    }

    #[rstest(
        curve,
        bits,
        name,
        case(NamedCurve::P256, 256, "P-256"),
        case(NamedCurve::P384, 384, "P-384")
    )]
    fn test_named_curve_properties(curve: NamedCurve, bits: usize, name: &str) {
        assert_eq!(bits, curve.bit_size());
        assert_eq!(bits / 8, curve.field_size());
        assert_eq!(name, curve.to_string());
    }
}
