//! Charset-label normalization: the alias table and the [`Charset`] handle.
//!
//! Real-world mail and HTML label their encodings with IANA names,
//! historical spellings, vendor inventions, and bare code-page numbers.
//! [`Charset::for_label`] maps any of them (case-insensitively) to a
//! canonical charset name plus a decode capability.
//!
//! The table is deliberately pragmatic rather than standards-pure.  A few
//! labels map to an approximate-but-not-exact decoder because that is what
//! senders actually mean (`us-ascii` content in the wild is windows-1252
//! more often than it is 7-bit clean), and the ISO-2022-CN/KR variants map
//! to a replacement decoder that yields U+FFFD rather than pretending to
//! understand them.  These mappings are compatibility decisions inherited
//! from the mail-processing ecosystem; downstream consumers depend on
//! them, so they are preserved exactly rather than "fixed".

use std::borrow::Cow;

use crate::decode::Decoder;
use crate::error::Error;

/// Lowercased label -> canonical charset name.
///
/// Grouped by target encoding.  Labels within a group are sorted; the
/// groups themselves follow the IANA/WHATWG family order with the
/// historical odds and ends folded into the family they resolve to.
/// Lookup is a linear scan: the table is read-only data, entries are
/// short, and label resolution happens once per document or header.
static ALIASES: &[(&str, &str)] = &[
    // -- UTF-8 --------------------------------------------------------
    ("unicode-1-1-utf-8", "utf-8"),
    ("utf-8", "utf-8"),
    ("utf8", "utf-8"),
    ("utf8mb4", "utf-8"), // MySQL's name for plain UTF-8
    // -- UTF-7 --------------------------------------------------------
    ("utf-7", "utf-7"),
    ("utf7", "utf-7"),
    // -- IBM866 -------------------------------------------------------
    ("866", "ibm866"),
    ("cp866", "ibm866"),
    ("csibm866", "ibm866"),
    ("ibm866", "ibm866"),
    // -- ISO-8859-2 ---------------------------------------------------
    ("8859-2", "iso-8859-2"),
    ("8859_2", "iso-8859-2"),
    ("csisolatin2", "iso-8859-2"),
    ("iso-8859-2", "iso-8859-2"),
    ("iso-ir-101", "iso-8859-2"),
    ("iso8859-2", "iso-8859-2"),
    ("iso88592", "iso-8859-2"),
    ("iso_8859-2", "iso-8859-2"),
    ("iso_8859-2:1987", "iso-8859-2"),
    ("l2", "iso-8859-2"),
    ("latin2", "iso-8859-2"),
    // -- ISO-8859-3 ---------------------------------------------------
    ("8859-3", "iso-8859-3"),
    ("8859_3", "iso-8859-3"),
    ("csisolatin3", "iso-8859-3"),
    ("iso-8859-3", "iso-8859-3"),
    ("iso-ir-109", "iso-8859-3"),
    ("iso8859-3", "iso-8859-3"),
    ("iso88593", "iso-8859-3"),
    ("iso_8859-3", "iso-8859-3"),
    ("iso_8859-3:1988", "iso-8859-3"),
    ("l3", "iso-8859-3"),
    ("latin3", "iso-8859-3"),
    // -- ISO-8859-4 ---------------------------------------------------
    ("8859-4", "iso-8859-4"),
    ("8859_4", "iso-8859-4"),
    ("csisolatin4", "iso-8859-4"),
    ("iso-8859-4", "iso-8859-4"),
    ("iso-ir-110", "iso-8859-4"),
    ("iso8859-4", "iso-8859-4"),
    ("iso88594", "iso-8859-4"),
    ("iso_8859-4", "iso-8859-4"),
    ("iso_8859-4:1988", "iso-8859-4"),
    ("l4", "iso-8859-4"),
    ("latin4", "iso-8859-4"),
    // -- ISO-8859-5 ---------------------------------------------------
    ("8859-5", "iso-8859-5"),
    ("8859_5", "iso-8859-5"),
    ("csisolatincyrillic", "iso-8859-5"),
    ("cyrillic", "iso-8859-5"),
    ("iso-8859-5", "iso-8859-5"),
    ("iso-ir-144", "iso-8859-5"),
    ("iso8859-5", "iso-8859-5"),
    ("iso88595", "iso-8859-5"),
    ("iso_8859-5", "iso-8859-5"),
    ("iso_8859-5:1988", "iso-8859-5"),
    // -- ISO-8859-6 ---------------------------------------------------
    ("8859-6", "iso-8859-6"),
    ("8859_6", "iso-8859-6"),
    ("arabic", "iso-8859-6"),
    ("asmo-708", "iso-8859-6"),
    ("csiso88596e", "iso-8859-6"),
    ("csiso88596i", "iso-8859-6"),
    ("csisolatinarabic", "iso-8859-6"),
    ("ecma-114", "iso-8859-6"),
    ("iso-8859-6", "iso-8859-6"),
    ("iso-8859-6-e", "iso-8859-6"),
    ("iso-8859-6-i", "iso-8859-6"),
    ("iso-ir-127", "iso-8859-6"),
    ("iso8859-6", "iso-8859-6"),
    ("iso88596", "iso-8859-6"),
    ("iso_8859-6", "iso-8859-6"),
    ("iso_8859-6:1987", "iso-8859-6"),
    // -- ISO-8859-7 ---------------------------------------------------
    ("8859-7", "iso-8859-7"),
    ("8859_7", "iso-8859-7"),
    ("csisolatingreek", "iso-8859-7"),
    ("ecma-118", "iso-8859-7"),
    ("elot_928", "iso-8859-7"),
    ("greek", "iso-8859-7"),
    ("greek8", "iso-8859-7"),
    ("iso-8859-7", "iso-8859-7"),
    ("iso-ir-126", "iso-8859-7"),
    ("iso8859-7", "iso-8859-7"),
    ("iso88597", "iso-8859-7"),
    ("iso_8859-7", "iso-8859-7"),
    ("iso_8859-7:1987", "iso-8859-7"),
    ("sun_eu_greek", "iso-8859-7"),
    // -- ISO-8859-8 ---------------------------------------------------
    ("8859-8", "iso-8859-8"),
    ("8859_8", "iso-8859-8"),
    ("csiso88598e", "iso-8859-8"),
    ("csisolatinhebrew", "iso-8859-8"),
    ("hebrew", "iso-8859-8"),
    ("iso-8859-8", "iso-8859-8"),
    ("iso-8859-8-e", "iso-8859-8"),
    ("iso-ir-138", "iso-8859-8"),
    ("iso8859-8", "iso-8859-8"),
    ("iso88598", "iso-8859-8"),
    ("iso_8859-8", "iso-8859-8"),
    ("iso_8859-8:1988", "iso-8859-8"),
    ("visual", "iso-8859-8"),
    // -- ISO-8859-8-I -------------------------------------------------
    ("csiso88598i", "iso-8859-8-i"),
    ("iso-8859-8-i", "iso-8859-8-i"),
    ("logical", "iso-8859-8-i"),
    // -- ISO-8859-10 --------------------------------------------------
    ("8859-10", "iso-8859-10"),
    ("8859_10", "iso-8859-10"),
    ("csisolatin6", "iso-8859-10"),
    ("iso-8859-10", "iso-8859-10"),
    ("iso-ir-157", "iso-8859-10"),
    ("iso8859-10", "iso-8859-10"),
    ("iso885910", "iso-8859-10"),
    ("l6", "iso-8859-10"),
    ("latin6", "iso-8859-10"),
    // -- ISO-8859-13 --------------------------------------------------
    ("8859-13", "iso-8859-13"),
    ("8859_13", "iso-8859-13"),
    ("iso-8859-13", "iso-8859-13"),
    ("iso8859-13", "iso-8859-13"),
    ("iso885913", "iso-8859-13"),
    // -- ISO-8859-14 --------------------------------------------------
    ("8859-14", "iso-8859-14"),
    ("8859_14", "iso-8859-14"),
    ("iso-8859-14", "iso-8859-14"),
    ("iso8859-14", "iso-8859-14"),
    ("iso885914", "iso-8859-14"),
    // -- ISO-8859-15 --------------------------------------------------
    ("8859-15", "iso-8859-15"),
    ("8859_15", "iso-8859-15"),
    ("csisolatin9", "iso-8859-15"),
    ("iso-8859-15", "iso-8859-15"),
    ("iso8859-15", "iso-8859-15"),
    ("iso885915", "iso-8859-15"),
    ("iso_8859-15", "iso-8859-15"),
    ("l9", "iso-8859-15"),
    // -- ISO-8859-16 --------------------------------------------------
    ("8859-16", "iso-8859-16"),
    ("8859_16", "iso-8859-16"),
    ("iso-8859-16", "iso-8859-16"),
    // -- KOI8-R -------------------------------------------------------
    ("cskoi8r", "koi8-r"),
    ("koi", "koi8-r"),
    ("koi8", "koi8-r"),
    ("koi8-r", "koi8-r"),
    ("koi8_r", "koi8-r"),
    // -- KOI8-U -------------------------------------------------------
    ("koi8-u", "koi8-u"),
    // -- macintosh ----------------------------------------------------
    ("csmacintosh", "macintosh"),
    ("mac", "macintosh"),
    ("macintosh", "macintosh"),
    ("x-mac-roman", "macintosh"),
    // -- windows-874 (also TIS-620, ISO-8859-11) ----------------------
    ("dos-874", "windows-874"),
    ("iso-8859-11", "windows-874"),
    ("iso8859-11", "windows-874"),
    ("iso885911", "windows-874"),
    ("tis-620", "windows-874"),
    ("windows-874", "windows-874"),
    // -- windows-1250 -------------------------------------------------
    ("238", "windows-1250"),
    ("cp1250", "windows-1250"),
    ("windows-1250", "windows-1250"),
    ("x-cp1250", "windows-1250"),
    // -- windows-1251 -------------------------------------------------
    ("cp1251", "windows-1251"),
    ("windows-1251", "windows-1251"),
    ("x-cp1251", "windows-1251"),
    // -- windows-1252: ascii / latin1 land here, not on iso-8859-1 ----
    ("8859-1", "windows-1252"),
    ("8859_1", "windows-1252"),
    ("ansi_x3.4-1968", "windows-1252"),
    ("ascii", "windows-1252"),
    ("cp1252", "windows-1252"),
    ("cp819", "windows-1252"),
    ("csisolatin1", "windows-1252"),
    ("ibm819", "windows-1252"),
    ("iso-ir-100", "windows-1252"),
    ("iso646-us", "windows-1252"), // ISO646 isn't us-ascii but 1991 version is
    ("iso: western", "windows-1252"), // same as iso-8859-1
    ("l1", "windows-1252"),
    ("latin1", "windows-1252"),
    ("us-ascii", "windows-1252"),
    ("we8iso8859p1", "windows-1252"), // same as iso-8859-1
    ("windows-1252", "windows-1252"),
    ("x-cp1252", "windows-1252"),
    // -- ISO-8859-1 proper (C1 range differs from windows-1252) ------
    ("iso-8859-1", "iso-8859-1"),
    ("iso8859-1", "iso-8859-1"),
    ("iso8859_1", "iso-8859-1"),
    ("iso88591", "iso-8859-1"),
    ("iso_8859-1", "iso-8859-1"),
    ("iso_8859-1:1987", "iso-8859-1"),
    // -- windows-1253 -------------------------------------------------
    ("cp1253", "windows-1253"),
    ("windows-1253", "windows-1253"),
    ("x-cp1253", "windows-1253"),
    // -- windows-1254 (also ISO-8859-9) -------------------------------
    ("cp1254", "windows-1254"),
    ("csisolatin5", "windows-1254"),
    ("iso-8859-9", "windows-1254"),
    ("iso-ir-148", "windows-1254"),
    ("iso8859-9", "windows-1254"),
    ("iso88599", "windows-1254"),
    ("iso_8859-9", "windows-1254"),
    ("iso_8859-9:1989", "windows-1254"),
    ("l5", "windows-1254"),
    ("latin5", "windows-1254"),
    ("windows-1254", "windows-1254"),
    ("x-cp1254", "windows-1254"),
    // -- windows-1255 -------------------------------------------------
    ("cp1255", "windows-1255"),
    ("windows-1255", "windows-1255"),
    ("x-cp1255", "windows-1255"),
    // -- windows-1256 -------------------------------------------------
    ("cp1256", "windows-1256"),
    ("windows-1256", "windows-1256"),
    ("x-cp1256", "windows-1256"),
    // -- windows-1257 -------------------------------------------------
    ("cp1257", "windows-1257"),
    ("windows-1257", "windows-1257"),
    ("x-cp1257", "windows-1257"),
    // -- windows-1258 -------------------------------------------------
    ("cp1258", "windows-1258"),
    ("windows-1258", "windows-1258"),
    ("x-cp1258", "windows-1258"),
    // -- x-mac-cyrillic -----------------------------------------------
    ("x-mac-cyrillic", "x-mac-cyrillic"),
    ("x-mac-ukrainian", "x-mac-cyrillic"),
    // -- GBK (gb2312 and friends) -------------------------------------
    ("chinese", "gbk"),
    ("cp936", "gbk"), // same as gb2312
    ("csgb2312", "gbk"),
    ("csiso58gb231280", "gbk"),
    ("gb2312", "gbk"),
    ("gb_2312", "gbk"),
    ("gb_2312-80", "gbk"),
    ("gbk", "gbk"),
    ("iso-ir-58", "gbk"),
    ("x-gbk", "gbk"),
    // -- gb18030 ------------------------------------------------------
    ("gb-18030", "gb18030"),
    ("gb18030", "gb18030"),
    // -- HZ-GB2312 ----------------------------------------------------
    ("hz-gb-2312", "hz-gb-2312"),
    // -- Big5 ---------------------------------------------------------
    ("136", "big5"), // same as chinese big5
    ("big5", "big5"),
    ("big5-hkscs", "big5"),
    ("cn-big5", "big5"),
    ("csbig5", "big5"),
    ("x-x-big5", "big5"),
    // -- EUC-JP -------------------------------------------------------
    ("cseucpkdfmtjapanese", "euc-jp"),
    ("euc-jp", "euc-jp"),
    ("x-euc-jp", "euc-jp"),
    // -- ISO-2022-JP --------------------------------------------------
    ("csiso2022jp", "iso-2022-jp"),
    ("iso-2022-jp", "iso-2022-jp"),
    // -- Shift_JIS ----------------------------------------------------
    ("cp932", "shift_jis"),
    ("csshiftjis", "shift_jis"),
    ("ms_kanji", "shift_jis"),
    ("shift-jis", "shift_jis"),
    ("shift_jis", "shift_jis"),
    ("sjis", "shift_jis"),
    ("windows-31j", "shift_jis"),
    ("x-sjis", "shift_jis"),
    // -- EUC-KR -------------------------------------------------------
    ("cseuckr", "euc-kr"),
    ("csksc56011987", "euc-kr"),
    ("euc-kr", "euc-kr"),
    ("iso-ir-149", "euc-kr"),
    ("korean", "euc-kr"),
    ("ks_c_5601-1987", "euc-kr"),
    ("ks_c_5601-1989", "euc-kr"),
    ("ksc5601", "euc-kr"),
    ("ksc_5601", "euc-kr"),
    ("windows-949", "euc-kr"),
    // -- ISO-2022 CN/KR variants: replacement, not real decoding -----
    ("csiso2022kr", "replacement"),
    ("iso-2022-cn", "replacement"),
    ("iso-2022-cn-ext", "replacement"),
    ("iso-2022-kr", "replacement"),
    // -- UTF-16 (unlabeled endianness is little-endian) ---------------
    ("utf-16", "utf-16le"),
    ("utf-16be", "utf-16be"),
    ("utf-16le", "utf-16le"),
    // -- x-user-defined -----------------------------------------------
    ("x-user-defined", "x-user-defined"),
    // -- CP850 (DOS Latin-1) ------------------------------------------
    ("cp-850", "cp850"),
    ("cp850", "cp850"),
    ("ibm850", "cp850"),
];

/// The decode capability behind a canonical charset name.
///
/// Most encodings are handled by the external provider; the remaining
/// variants are the encodings it does not carry (UTF-7, true ISO-8859-1,
/// CP850, HZ framing) plus the deliberate replacement stub.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Codec {
    /// Decoded by `encoding_rs`.
    Encoding(&'static encoding_rs::Encoding),
    /// ISO-8859-1 proper: every byte maps to the code point of the same
    /// value, including the C1 controls windows-1252 repurposes.
    Latin1,
    /// CP850 via a compile-time high-half table.
    Cp850,
    /// Minimal RFC 2152 UTF-7 decoder.
    Utf7,
    /// HZ framing around the GBK capability.
    HzGb2312,
    /// Yields a single U+FFFD for any non-empty input.
    Replacement,
}

/// Canonical charset name -> decode capability.
///
/// Every canonical name appearing as a value in [`ALIASES`] has an arm
/// here; the closure test in this module keeps the two in sync.
fn codec_for(name: &str) -> Option<Codec> {
    use encoding_rs as rs;
    Some(match name {
        "utf-8" => Codec::Encoding(rs::UTF_8),
        "utf-7" => Codec::Utf7,
        "ibm866" => Codec::Encoding(rs::IBM866),
        "iso-8859-1" => Codec::Latin1,
        "iso-8859-2" => Codec::Encoding(rs::ISO_8859_2),
        "iso-8859-3" => Codec::Encoding(rs::ISO_8859_3),
        "iso-8859-4" => Codec::Encoding(rs::ISO_8859_4),
        "iso-8859-5" => Codec::Encoding(rs::ISO_8859_5),
        "iso-8859-6" => Codec::Encoding(rs::ISO_8859_6),
        "iso-8859-7" => Codec::Encoding(rs::ISO_8859_7),
        "iso-8859-8" => Codec::Encoding(rs::ISO_8859_8),
        "iso-8859-8-i" => Codec::Encoding(rs::ISO_8859_8_I),
        "iso-8859-10" => Codec::Encoding(rs::ISO_8859_10),
        "iso-8859-13" => Codec::Encoding(rs::ISO_8859_13),
        "iso-8859-14" => Codec::Encoding(rs::ISO_8859_14),
        "iso-8859-15" => Codec::Encoding(rs::ISO_8859_15),
        "iso-8859-16" => Codec::Encoding(rs::ISO_8859_16),
        "koi8-r" => Codec::Encoding(rs::KOI8_R),
        "koi8-u" => Codec::Encoding(rs::KOI8_U),
        "macintosh" => Codec::Encoding(rs::MACINTOSH),
        "windows-874" => Codec::Encoding(rs::WINDOWS_874),
        "windows-1250" => Codec::Encoding(rs::WINDOWS_1250),
        "windows-1251" => Codec::Encoding(rs::WINDOWS_1251),
        "windows-1252" => Codec::Encoding(rs::WINDOWS_1252),
        "windows-1253" => Codec::Encoding(rs::WINDOWS_1253),
        "windows-1254" => Codec::Encoding(rs::WINDOWS_1254),
        "windows-1255" => Codec::Encoding(rs::WINDOWS_1255),
        "windows-1256" => Codec::Encoding(rs::WINDOWS_1256),
        "windows-1257" => Codec::Encoding(rs::WINDOWS_1257),
        "windows-1258" => Codec::Encoding(rs::WINDOWS_1258),
        "x-mac-cyrillic" => Codec::Encoding(rs::X_MAC_CYRILLIC),
        "gbk" => Codec::Encoding(rs::GBK),
        "gb18030" => Codec::Encoding(rs::GB18030),
        "hz-gb-2312" => Codec::HzGb2312,
        "big5" => Codec::Encoding(rs::BIG5),
        "euc-jp" => Codec::Encoding(rs::EUC_JP),
        "iso-2022-jp" => Codec::Encoding(rs::ISO_2022_JP),
        "shift_jis" => Codec::Encoding(rs::SHIFT_JIS),
        "euc-kr" => Codec::Encoding(rs::EUC_KR),
        "replacement" => Codec::Replacement,
        "utf-16be" => Codec::Encoding(rs::UTF_16BE),
        "utf-16le" => Codec::Encoding(rs::UTF_16LE),
        "x-user-defined" => Codec::Encoding(rs::X_USER_DEFINED),
        "cp850" => Codec::Cp850,
        _ => return None,
    })
}

/// A resolved charset: a canonical name plus its decode capability.
///
/// Obtained from [`Charset::for_label`].  Copyable and `'static`; the
/// underlying table is immutable process-lifetime data, so lookups and
/// decodes are safe from any number of threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Charset {
    name: &'static str,
    pub(crate) codec: Codec,
}

impl Charset {
    /// Look up a charset label, case-insensitively.
    ///
    /// The label is ASCII-lowercased before the table lookup; no other
    /// normalization is applied (in particular, surrounding whitespace is
    /// the caller's problem).  Returns `None` for unrecognized labels --
    /// this crate never guesses a fallback.
    ///
    /// ```
    /// use mailcharset::Charset;
    ///
    /// let cs = Charset::for_label("Latin1").unwrap();
    /// assert_eq!(cs.name(), "windows-1252");
    /// assert!(Charset::for_label("wtf-9").is_none());
    /// ```
    pub fn for_label(label: &str) -> Option<Charset> {
        let lower = label.to_ascii_lowercase();
        let &(_, name) = ALIASES.iter().find(|&&(alias, _)| alias == lower)?;
        let codec = codec_for(name)?;
        trace!(label, canonical = name, "charset label resolved");
        Some(Charset { name, codec })
    }

    /// The canonical name of this charset, e.g. `"windows-1252"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Decode `bytes` from this charset into a UTF-8 string.
    ///
    /// The whole input is decoded eagerly.  Malformed byte sequences are
    /// an error and any partial output is discarded; there is no lossy
    /// mode.  A fresh decoder instance is used per call, so stateful
    /// encodings (shift sequences, multi-byte pairs) start clean.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, Error> {
        match self.codec {
            Codec::Encoding(enc) => enc
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned)
                .ok_or_else(|| Error::decode("malformed byte sequence").with_label(self.name)),
            _ => {
                let mut decoder = self.new_decoder();
                let mut out = Vec::with_capacity(bytes.len());
                let decoded = decoder
                    .push(bytes, &mut out)
                    .and_then(|()| decoder.finish(&mut out));
                decoded.map_err(|e| e.with_label(self.name))?;
                String::from_utf8(out)
                    .map_err(|_| Error::decode("decoder emitted invalid UTF-8").with_label(self.name))
            }
        }
    }

    /// Create a fresh incremental decoder for this charset.
    pub(crate) fn new_decoder(&self) -> Decoder {
        trace!(canonical = self.name, "charset decoder created");
        Decoder::new(self.codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let lower = Charset::for_label("utf-8").expect("utf-8");
        let upper = Charset::for_label("UTF-8").expect("UTF-8");
        let mixed = Charset::for_label("Utf8").expect("Utf8");
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower.name(), "utf-8");
    }

    #[test]
    fn lookup_does_not_trim() {
        assert!(Charset::for_label(" utf-8").is_none());
        assert!(Charset::for_label("utf-8 ").is_none());
    }

    /// Every canonical name used as a table value resolves to a codec,
    /// and is itself a key in the table -- except `replacement`, which
    /// exists only as a decode-capability reference.
    #[test]
    fn canonical_names_close_over_the_table() {
        for &(alias, canonical) in ALIASES {
            assert!(
                codec_for(canonical).is_some(),
                "{alias} maps to {canonical}, which has no codec"
            );
            if canonical == "replacement" {
                continue;
            }
            let cs = Charset::for_label(canonical)
                .unwrap_or_else(|| panic!("canonical {canonical} is not itself a key"));
            assert_eq!(cs.name(), canonical, "canonical {canonical} must be a fixed point");
        }
    }

    /// Every alias resolves, and resolution is stable under re-lookup of
    /// the canonical name (many-to-one, one level deep: no alias chains).
    #[test]
    fn every_alias_resolves() {
        for &(alias, canonical) in ALIASES {
            let cs = Charset::for_label(alias)
                .unwrap_or_else(|| panic!("alias {alias} did not resolve"));
            assert_eq!(cs.name(), canonical, "alias {alias}");
        }
    }

    /// The table has no duplicate keys.
    #[test]
    fn alias_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &(alias, _) in ALIASES {
            assert!(seen.insert(alias), "duplicate alias {alias}");
        }
    }

    /// The intentionally approximate mappings, preserved verbatim from
    /// the mail ecosystem this table is inherited from.
    #[test]
    fn approximate_mappings_table() {
        let cases: &[(&str, &str, &str)] = &[
            // (label, canonical, description)
            ("us-ascii", "windows-1252", "ascii means windows-1252 in the wild"),
            ("ascii", "windows-1252", "ascii means windows-1252 in the wild"),
            ("ansi_x3.4-1968", "windows-1252", "the unix locale spelling of ascii"),
            ("latin1", "windows-1252", "latin1 label, windows-1252 bytes"),
            ("iso-8859-1", "iso-8859-1", "the explicit ISO name keeps a true Latin-1 decoder"),
            ("iso-8859-9", "windows-1254", "Turkish: superset code page"),
            ("iso-8859-11", "windows-874", "Thai: superset code page"),
            ("utf-16", "utf-16le", "unlabeled UTF-16 is little-endian"),
            ("iso-2022-kr", "replacement", "stubbed, never really decoded"),
            ("iso-2022-cn", "replacement", "stubbed, never really decoded"),
            ("hz-gb-2312", "hz-gb-2312", "HZ really decodes, unlike the ISO-2022 variants"),
            ("136", "big5", "historical numeric alias"),
            ("238", "windows-1250", "historical numeric alias"),
            ("866", "ibm866", "historical numeric alias"),
            ("8859-1", "windows-1252", "bare 8859-1 follows the latin1 convention"),
            ("utf8mb4", "utf-8", "MySQL spelling"),
            ("cp932", "shift_jis", "vendor code page for Shift_JIS"),
            ("cp936", "gbk", "vendor code page for GBK"),
            ("windows-949", "euc-kr", "vendor code page for EUC-KR"),
        ];
        for &(label, canonical, desc) in cases {
            let cs = Charset::for_label(label).unwrap_or_else(|| panic!("{desc}: {label}"));
            assert_eq!(cs.name(), canonical, "{desc}");
        }
    }
}
