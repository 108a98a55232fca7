/*!
 * Tests for the narration pipeline
 */

use mdnarrate::narration::{
    CodeBlockMode, NarrationPipeline, NarrationProfile, PipelineConfig, SubstitutionTable,
};
use mdnarrate::errors::NarrationError;
use crate::common;

fn pipeline(profile: NarrationProfile) -> NarrationPipeline {
    NarrationPipeline::new(&PipelineConfig::new(profile)).expect("pipeline should build")
}

/// Test that plain prose only goes through whitespace normalization and heading labels
#[test]
fn test_process_withPlainProse_shouldOnlyNormalizeAndLabel() {
    let input = "Plain prose line one.\n\n\n\nSecond   paragraph   here.\n# Heading\n  indented line\n";
    let expected = "Plain prose line one.\n\nSecond paragraph here.\nSection: Heading\nindented line\n";

    assert_eq!(pipeline(NarrationProfile::English).process(input), expected);
}

/// Test the documented rule order
#[test]
fn test_rule_names_withNarrateMode_shouldFollowCanonicalOrder() {
    let names = pipeline(NarrationProfile::English).rule_names();

    assert_eq!(
        names,
        vec![
            "citation_line",
            "headings",
            "containers",
            "mermaid_blocks",
            "code_block_narration",
            "images",
            "horizontal_rules",
            "reserved_labels",
            "links",
            "emphasis",
            "blockquotes",
        ]
    );
}

/// Test that an image span disappears entirely, whatever surrounds it
#[test]
fn test_process_withImageOnly_shouldBeEmpty() {
    assert_eq!(pipeline(NarrationProfile::English).process("![alt](http://x/y.png)"), "");
}

/// Test that a link keeps only its text
#[test]
fn test_process_withLink_shouldKeepText() {
    assert_eq!(pipeline(NarrationProfile::English).process("[click here](http://x)"), "click here\n");
}

/// Test that a mermaid diagram is removed even in narrate mode
#[test]
fn test_process_withMermaidBlock_shouldBeEmpty() {
    assert_eq!(pipeline(NarrationProfile::English).process("```mermaid\nA-->B\n```"), "");
}

/// Test that a mermaid diagram between code blocks does not swallow its neighbours
#[test]
fn test_process_withMermaidBetweenCodeBlocks_shouldNarrateOthers() {
    let input = "```cs\nclass Person {}\n```\n\n```mermaid\nA-->B\n```\n\n```\nx = 1\n```";
    let expected = "Let's consider an example of class Person with its fields and methods.\n\nLet's consider a relevant code example.\n";

    assert_eq!(pipeline(NarrationProfile::English).process(input), expected);
}

/// Test that a block with a Person class is narrated with the class name
#[test]
fn test_process_withPersonClass_shouldNamePerson() {
    let result = pipeline(NarrationProfile::English).process("```java\nclass Person { String name; }\n```");
    assert!(result.contains("Person"));
    assert!(!result.contains("String name"));
}

/// Test that four blank lines become one
#[test]
fn test_process_withFourBlankLines_shouldKeepOneBlankLine() {
    assert_eq!(pipeline(NarrationProfile::English).process("a\n\n\n\n\nb"), "a\n\nb\n");
}

/// Test level-three headings in both profiles
#[test]
fn test_process_withLevelThreeHeading_shouldUseProfileLabel() {
    assert_eq!(pipeline(NarrationProfile::English).process("### Title"), "Point: Title\n");
    assert_eq!(pipeline(NarrationProfile::Ukrainian).process("### Title"), "Пункт: Title\n");
}

/// Test that level-five headings do not crash and keep their marker
#[test]
fn test_process_withLevelFiveHeading_shouldPassThrough() {
    assert_eq!(pipeline(NarrationProfile::English).process("##### Deep"), "##### Deep\n");
}

/// Test that DDD is replaced inside otherwise untouched prose
#[test]
fn test_process_withDddInProse_shouldSubstituteEverywhere() {
    let result = pipeline(NarrationProfile::Ukrainian).process("We apply DDD.\nDDD helps; so does DDD-lite.");
    assert_eq!(result, "We apply Ді-Ді-Ді.\nДі-Ді-Ді helps; so does Ді-Ді-Ді-lite.\n");
}

/// Test that structural stripping is idempotent
#[test]
fn test_process_twice_withEnglishLesson_shouldBeStable() -> anyhow::Result<()> {
    let pipeline = pipeline(NarrationProfile::English);
    let first = pipeline.process(&common::lesson_markdown()?);
    let second = pipeline.process(&first);

    assert_eq!(first, second);
    Ok(())
}

/// Test the known hazard: a phonetic form that re-emits its own source term
#[test]
fn test_process_twice_withSelfReferencingEntry_shouldNotBeIdempotent() {
    let pipeline = pipeline(NarrationProfile::Ukrainian);
    let first = pipeline.process("Martin Fowler wrote it.");
    let second = pipeline.process(&first);

    assert_eq!(first, "Мартін Фаулер (англійською Martin Fowler) wrote it.\n");
    assert_eq!(
        second,
        "Мартін Фаулер (англійською Мартін Фаулер (англійською Martin Fowler)) wrote it.\n"
    );
}

/// Test the known hazard: a later run re-matching an earlier entry
#[test]
fn test_process_twice_withChainedEntries_shouldNotBeIdempotent() {
    let table = SubstitutionTable::from_pairs(&[("dot", "point"), (".NET", "dot net")]);
    let config = PipelineConfig::new(NarrationProfile::English).with_substitutions(table);
    let pipeline = NarrationPipeline::new(&config).unwrap();

    let first = pipeline.process("Built on .NET");
    assert_eq!(first, "Built on dot net\n");
    assert_eq!(pipeline.process(&first), "Built on point net\n");
}

/// Test the known hazard: a heading inside a blockquote surfaces after the heading rule ran
#[test]
fn test_process_twice_withQuotedHeading_shouldNotBeIdempotent() {
    let pipeline = pipeline(NarrationProfile::English);
    let first = pipeline.process("> # Quoted");

    assert_eq!(first, "# Quoted\n");
    assert_eq!(pipeline.process(&first), "Section: Quoted\n");
}

/// Test the known hazard: emphasis stripping that rebuilds a link
#[test]
fn test_process_twice_withUnderscoreBeforeUrl_shouldNotBeIdempotent() {
    let pipeline = pipeline(NarrationProfile::English);
    let first = pipeline.process("[a]_(http://x)");

    assert_eq!(first, "[a](http://x)\n");
    assert_eq!(pipeline.process(&first), "a\n");
}

/// Test that a label list too large for the regex size limit is reported, not panicked on
#[test]
fn test_new_withOversizedReservedLabelList_shouldFailWithPatternError() {
    let labels: Vec<String> = (0..30_000)
        .map(|i| format!("label-{}-{}", i, "abcdefghij".repeat(9)))
        .collect();
    let config = PipelineConfig::new(NarrationProfile::English).with_reserved_labels(labels);

    let error = NarrationPipeline::new(&config).unwrap_err();
    assert!(matches!(error, NarrationError::Pattern(_)));
}

/// Test that emphasis and quote markers are stripped without matched pairs
#[test]
fn test_process_withUnbalancedMarkup_shouldStripMarkers() {
    let input = "> **Note:* keep _this\n> text**";
    assert_eq!(pipeline(NarrationProfile::English).process(input), "Note: keep this\ntext\n");
}

/// Test that custom reserved labels replace the defaults
#[test]
fn test_process_withCustomReservedLabels_shouldRemoveOnlyThose() {
    let config = PipelineConfig::new(NarrationProfile::English)
        .with_reserved_labels(vec!["description".to_string()]);
    let pipeline = NarrationPipeline::new(&config).unwrap();

    assert_eq!(pipeline.process("#description\nText\n#title\n"), "Text\n#title\n");
}

/// Test the delete-only variant on the sample lesson
#[test]
fn test_process_withStripMode_shouldOmitCodeSentences() -> anyhow::Result<()> {
    let config = PipelineConfig::new(NarrationProfile::English).with_code_blocks(CodeBlockMode::Strip);
    let pipeline = NarrationPipeline::new(&config)?;
    let result = pipeline.process(&common::lesson_markdown()?);

    assert!(!result.contains("Let's consider"));
    assert!(result.contains("Point: Example\n\nD-D-D is about ubiquitous language."));
    assert!(result.ends_with("Subpoint: Storage\n"));
    Ok(())
}

/// Test the report counters on the sample lesson
#[test]
fn test_process_with_report_withLesson_shouldCountEachRule() -> anyhow::Result<()> {
    let (_, report) = pipeline(NarrationProfile::English).process_with_report(&common::lesson_markdown()?);

    assert_eq!(report.hits_for("citation_line"), 1);
    assert_eq!(report.hits_for("headings"), 4);
    assert_eq!(report.hits_for("containers"), 2);
    assert_eq!(report.hits_for("mermaid_blocks"), 1);
    assert_eq!(report.hits_for("code_block_narration"), 2);
    assert_eq!(report.hits_for("images"), 1);
    assert_eq!(report.hits_for("horizontal_rules"), 1);
    assert_eq!(report.hits_for("links"), 1);
    assert_eq!(report.hits_for("blockquotes"), 1);
    assert_eq!(report.total_substitutions(), 1);
    Ok(())
}
