/*!
 * Tests for the built-in substitution tables and narration profiles
 */

use mdnarrate::narration::{NarrationProfile, SubstitutionEntry, SubstitutionTable};

/// Test that capitalized and lowercase forms are separate entries
#[test]
fn test_ukrainian_table_withBothCases_shouldReplaceEachForm() {
    let table = NarrationProfile::Ukrainian.builtin_substitutions();
    let result = table.apply("Domain Model vs domain model vs DOMAIN MODEL");

    assert_eq!(result, "Домен Модел vs домен модел vs DOMAIN MODEL");
}

/// Test that apostrophes in targets are kept literally
#[test]
fn test_ukrainian_table_withValueObjects_shouldKeepApostrophes() {
    let table = NarrationProfile::Ukrainian.builtin_substitutions();
    assert_eq!(table.apply("value objects"), "вел'ю об'єктс");
}

/// Test that substitution is not word-boundary aware
#[test]
fn test_ukrainian_table_withTermInsideWord_shouldStillReplace() {
    let table = NarrationProfile::Ukrainian.builtin_substitutions();
    assert_eq!(table.apply("JavaScript"), "ДжаваScript");
}

/// Test that the English table leaves ordinary prose alone
#[test]
fn test_english_table_withOrdinaryProse_shouldNotChangeText() {
    let table = NarrationProfile::English.builtin_substitutions();
    let text = "The domain model keeps business rules close to the data.";
    assert_eq!(table.apply(text), text);
}

/// Test that entries appended after the built-in table run last
#[test]
fn test_extend_withExtraEntries_shouldApplyAfterBuiltins() {
    let mut table = NarrationProfile::English.builtin_substitutions();
    table.extend(vec![SubstitutionEntry::new("D-D-D", "domain driven design")]);

    assert_eq!(table.apply("DDD"), "domain driven design");
}

/// Test hit counting across several entries
#[test]
fn test_apply_with_hits_withSeveralTerms_shouldReportInTableOrder() {
    let table = SubstitutionTable::from_pairs(&[("CRUD", "crud"), ("SLA", "S-L-A")]);
    let (_, hits) = table.apply_with_hits("SLA, CRUD, SLA");
    let names: Vec<&str> = hits.iter().map(|hit| hit.name.as_str()).collect();

    assert_eq!(names, vec!["CRUD", "SLA"]);
    assert_eq!(hits[1].count, 2);
}
