/*!
 * Narration profiles.
 *
 * A profile holds the spoken vocabulary of one target language: the labels
 * read before headings, the sentences that stand in for code blocks and the
 * built-in phonetic substitution table.
 */

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::code_blocks::{CodeTopic, DomainType};
use super::substitutions::SubstitutionTable;

/// Target language of the narration text
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NarrationProfile {
    // @profile: English labels and sentences
    #[default]
    English,
    // @profile: Ukrainian labels, sentences and phonetic spellings
    Ukrainian,
}

impl NarrationProfile {
    // @returns: Capitalized profile name
    pub fn display_name(&self) -> &str {
        match self {
            Self::English => "English",
            Self::Ukrainian => "Ukrainian",
        }
    }

    // @returns: Lowercase profile identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::English => "english".to_string(),
            Self::Ukrainian => "ukrainian".to_string(),
        }
    }

    /// Spoken label for a heading level, `None` for levels the pipeline leaves alone
    pub fn heading_label(&self, level: usize) -> Option<&'static str> {
        let labels = match self {
            Self::English => ["Section", "Subsection", "Point", "Subpoint"],
            Self::Ukrainian => ["Розділ", "Підрозділ", "Пункт", "Підпункт"],
        };
        level.checked_sub(1).and_then(|index| labels.get(index).copied())
    }

    /// Sentence read in place of a code block about the given topic
    pub fn code_narration(&self, topic: CodeTopic) -> String {
        match self {
            Self::English => match topic {
                CodeTopic::DomainClass(domain) => format!(
                    "Let's consider an example of class {} with its {}.",
                    domain.name(),
                    match domain {
                        DomainType::Color => "logic",
                        DomainType::Person => "fields and methods",
                        DomainType::Ticket => "business logic",
                    }
                ),
                CodeTopic::SqlUpdate => {
                    "Let's consider an example of an SQL query that updates data.".to_string()
                }
                CodeTopic::DataFormat => {
                    "Let's consider an example of a data structure in JSON format.".to_string()
                }
                CodeTopic::Generic => "Let's consider a relevant code example.".to_string(),
            },
            Self::Ukrainian => match topic {
                CodeTopic::DomainClass(DomainType::Color) => {
                    "Розглянемо приклад класу Колор з відповідною логікою.".to_string()
                }
                CodeTopic::DomainClass(DomainType::Person) => {
                    "Розглянемо приклад класу Персон з відповідними полями та методами.".to_string()
                }
                CodeTopic::DomainClass(DomainType::Ticket) => {
                    "Розглянемо приклад класу Тікет з відповідною бізнес-логікою.".to_string()
                }
                CodeTopic::SqlUpdate => {
                    "Розглянемо приклад Ес-Ку-Ель запиту для оновлення даних.".to_string()
                }
                CodeTopic::DataFormat => {
                    "Розглянемо приклад структури даних у форматі Джі-Сон.".to_string()
                }
                CodeTopic::Generic => "Розглянемо відповідний приклад коду.".to_string(),
            },
        }
    }

    /// Built-in phonetic substitution table for this profile
    pub fn builtin_substitutions(&self) -> SubstitutionTable {
        match self {
            Self::English => SubstitutionTable::from_pairs(ENGLISH_SUBSTITUTIONS),
            Self::Ukrainian => SubstitutionTable::from_pairs(UKRAINIAN_SUBSTITUTIONS),
        }
    }
}

impl std::fmt::Display for NarrationProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for NarrationProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "ukrainian" | "uk" => Ok(Self::Ukrainian),
            _ => Err(anyhow!("Invalid narration profile: {}", s)),
        }
    }
}

/// Acronyms a speech engine tends to swallow or misread in English
const ENGLISH_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("DDD", "D-D-D"),
    ("CRUD", "crud"),
    ("SLA", "S-L-A"),
    ("POCOs", "P-O-C-Os"),
    ("POJOs", "P-O-J-Os"),
    ("POPOs", "P-O-P-Os"),
    (".NET", "dot net"),
];

// Order matters: entries run top to bottom over the whole buffer.
const UKRAINIAN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Transaction Script", "Транзекшн Скріпт"),
    ("transaction script", "транзекшн скріпт"),
    ("Active Record", "Ектів Рекорд"),
    ("active record", "ектів рекорд"),
    ("Domain Model", "Домен Модел"),
    ("domain model", "домен модел"),
    ("Martin Fowler", "Мартін Фаулер (англійською Martin Fowler)"),
    ("Eric Evans", "Ерік Еванс (англійською Eric Evans)"),
    ("aggregates", "агрегейтс"),
    ("value objects", "вел'ю об'єктс"),
    ("domain events", "домен івентс"),
    ("domain services", "домен сервісіс"),
    ("Value Objects", "Вел'ю Об'єктс"),
    ("Aggregates", "Агрегейтс"),
    ("Domain Services", "Домен Сервісіс"),
    ("Domain Events", "Домен Івентс"),
    ("Domain-Driven Design", "Домен-Дрівен Дізайн"),
    ("DDD", "Ді-Ді-Ді"),
    ("CRUD", "Сі-Ар-Ю-Ді"),
    (
        "Patterns of Enterprise Application Architecture",
        "Паттернс оф Ентерпрайз Епплікейшн Аркітекчер",
    ),
    ("help desk", "хелп деск"),
    ("SLA", "Ес-Ель-Ей"),
    ("ubiquitous language", "юбіквітос ленгвідж"),
    ("bounded context", "баундед контекст"),
    ("Primitive Obsession", "прімітів обсешн"),
    ("POCOs", "Пі-О-Сі-Оуз"),
    (".NET", "дот-нет"),
    ("POJOs", "Пі-О-Джей-Оуз"),
    ("Java", "Джава"),
    ("POPOs", "Пі-О-Пі-Оуз"),
    ("Python", "Пайтон"),
    ("aggregate root", "агрегейт рут"),
    ("immutable", "ім'ютабл"),
    ("command", "команд"),
    ("concurrency", "конкаренсі"),
    ("eventual consistency", "івенчуал консистенсі"),
    ("core subdomain", "кор саб-домен"),
    ("supporting subdomains", "сапортінг саб-доменс"),
    ("generic subdomains", "дженерік саб-доменс"),
];
