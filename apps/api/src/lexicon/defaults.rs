//! Built-in Spanish-language tables.

use std::collections::BTreeMap;

use super::{IndustryKeywords, Lexicon, SeniorityMarkers};
use crate::extraction::models::{EducationTier, SkillCategory};
use crate::improvement::models::Section;
use crate::requirements::models::{EducationLevel, RequiredSkillCategory};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn table<K: Ord + Copy>(entries: &[(K, &[&str])]) -> BTreeMap<K, Vec<String>> {
    entries.iter().map(|(k, v)| (*k, words(v))).collect()
}

const TECHNICAL_SKILLS: &[&str] = &[
    "python", "java", "javascript", "typescript", "sql", "mysql", "postgresql",
    "mongodb", "html", "css", "react", "angular", "vue", "node.js", "express",
    "django", "flask", "fastapi", "spring", "laravel", "ruby", "php", "c#", "c++",
    "go", "rust", "swift", "kotlin", "android", "ios", "linux", "windows", "macos",
    "docker", "kubernetes", "aws", "azure", "gcp", "git", "github", "gitlab",
    "jenkins", "ci/cd", "devops", "agile", "scrum", "kanban", "jira", "confluence",
    "machine learning", "deep learning", "ai", "tensorflow", "pytorch", "pandas",
    "numpy", "scikit-learn", "tableau", "power bi", "excel", "word", "powerpoint",
    "outlook", "sharepoint", "salesforce", "sap", "oracle", "redes", "seguridad",
    "criptografía", "api", "rest", "graphql", "microservicios", "arquitectura",
];

const SOFT_SKILLS: &[&str] = &[
    "liderazgo", "trabajo en equipo", "comunicación", "resolución de problemas",
    "pensamiento crítico", "creatividad", "adaptabilidad", "gestión del tiempo",
    "organización", "planificación", "negociación", "persuasión", "empatía",
    "trabajo bajo presión", "autonomía", "proactividad", "colaboración",
    "atención al detalle", "innovación", "flexibilidad", "resiliencia",
];

const ACTION_VERBS: &[&str] = &[
    "logré", "lideré", "desarrollé", "implementé", "mejoré", "optimicé",
    "gestioné", "coordiné", "creé", "diseñé", "automaticé", "reduje",
    "incrementé", "solucioné", "analicé", "planifiqué", "organicé",
    "supervisé", "capacité", "negocié", "innové", "autoricé", "presidé",
];

const WEAK_WORDS: &[&str] = &[
    "ayudé", "participé", "colaboré", "asistí", "fui parte de",
    "tuve que", "debía", "intenté", "traté de", "quizás", "tal vez",
];

const KEYWORD_STOP_WORDS: &[&str] = &[
    "para", "con", "del", "los", "las", "por", "como", "más", "sus",
    "este", "esta", "esto", "tiene", "debe", "puede", "trabajo",
    "empresa", "puesto", "equipo", "nuestro", "nuestra", "busca",
    "buscamos", "responsable", "encargado", "funciones", "tareas",
    "deben", "deberá", "necesario", "importante", "además", "también",
];

const SKILL_CATEGORIES: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Languages,
        &[
            "python", "java", "javascript", "typescript", "ruby", "php", "c#", "c++", "go",
            "rust", "swift", "kotlin",
        ],
    ),
    (
        SkillCategory::Frameworks,
        &[
            "react", "angular", "vue", "node.js", "express", "django", "flask", "fastapi",
            "spring", "laravel",
        ],
    ),
    (SkillCategory::Databases, &["sql", "mysql", "postgresql", "mongodb"]),
    (
        SkillCategory::Tools,
        &["git", "github", "gitlab", "jenkins", "docker", "kubernetes", "jira", "confluence"],
    ),
    (SkillCategory::Cloud, &["aws", "azure", "gcp"]),
    (SkillCategory::Methodologies, &["agile", "scrum", "kanban", "devops", "ci/cd"]),
];

const SECTION_KEYWORDS: &[(Section, &[&str])] = &[
    (Section::PersonalInfo, &["nombre", "teléfono", "email", "dirección", "linkedin"]),
    (
        Section::WorkExperience,
        &["experiencia", "laboral", "trabajo", "empleo", "profesional"],
    ),
    (
        Section::Education,
        &["educación", "formación", "estudios", "académico", "universidad"],
    ),
    (Section::Skills, &["habilidades", "competencias", "skills", "tecnologías"]),
    (Section::Summary, &["resumen", "perfil", "objetivo", "profesional"]),
    (
        Section::Achievements,
        &["logros", "achievements", "resultados", "reconocimientos"],
    ),
    (
        Section::Certifications,
        &["certificaciones", "cursos", "diplomas", "certificates"],
    ),
];

const EDUCATION_TIERS: &[(EducationTier, &[&str])] = &[
    (EducationTier::Secondary, &["bachiller", "bachillerato", "secundaria", "colegio"]),
    (
        EducationTier::Undergraduate,
        &["licenciatura", "grado", "ingeniería", "universidad", "carrera", "pregrado"],
    ),
    (
        EducationTier::Graduate,
        &["maestría", "master", "doctorado", "phd", "posgrado", "especialización"],
    ),
    (
        EducationTier::Certification,
        &["certificación", "certificado", "diplomado", "curso", "bootcamp", "capacitación"],
    ),
];

const REQUIRED_SKILLS: &[(RequiredSkillCategory, &[&str])] = &[
    (
        RequiredSkillCategory::ProgrammingLanguages,
        &["python", "java", "javascript", "typescript", "c#", "php", "ruby", "go", "rust", "swift"],
    ),
    (
        RequiredSkillCategory::Frameworks,
        &["react", "angular", "vue", "node.js", "django", "flask", "spring", "laravel", "express"],
    ),
    (
        RequiredSkillCategory::Databases,
        &["sql", "mysql", "postgresql", "mongodb", "oracle", "redis", "sql server"],
    ),
    (
        RequiredSkillCategory::DevopsTools,
        &["docker", "kubernetes", "aws", "azure", "gcp", "jenkins", "git", "github", "gitlab"],
    ),
    (
        RequiredSkillCategory::DataAnalysis,
        &[
            "machine learning", "data science", "pandas", "numpy", "tensorflow", "pytorch",
            "tableau", "power bi",
        ],
    ),
    (
        RequiredSkillCategory::Methodologies,
        &["agile", "scrum", "kanban", "devops", "ci/cd"],
    ),
    (
        RequiredSkillCategory::SoftSkills,
        &[
            "trabajo en equipo", "comunicación", "liderazgo", "resolución de problemas",
            "adaptabilidad", "proactividad",
        ],
    ),
];

const REQUIRED_EDUCATION: &[(EducationLevel, &[&str])] = &[
    (EducationLevel::Secondary, &["bachiller", "secundaria"]),
    (EducationLevel::Technical, &["técnico", "tecnólogo"]),
    (
        EducationLevel::Undergraduate,
        &["licenciatura", "grado", "ingeniería", "universitario"],
    ),
    (EducationLevel::Graduate, &["maestría", "master", "doctorado", "postgrado"]),
];

const INDUSTRIES: &[(&str, &[&str])] = &[
    ("tecnologia", &["tecnología", "software", "it", "sistemas", "desarrollo"]),
    ("finanzas", &["finanzas", "bancario", "fintech", "contabilidad"]),
    ("salud", &["salud", "médico", "farmacéutico", "hospital"]),
    ("educacion", &["educación", "académico", "enseñanza", "universidad"]),
    ("retail", &["retail", "comercio", "ventas", "ecommerce"]),
    ("manufactura", &["manufactura", "producción", "industrial", "fábrica"]),
];

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            technical_skills: words(TECHNICAL_SKILLS),
            soft_skills: words(SOFT_SKILLS),
            skill_categories: table(SKILL_CATEGORIES),

            action_verbs: words(ACTION_VERBS),
            weak_words: words(WEAK_WORDS),
            professional_keywords: words(&[
                "gestión", "desarrollo", "implementación", "optimización", "liderazgo",
            ]),

            section_keywords: table(SECTION_KEYWORDS),
            education_tiers: table(EDUCATION_TIERS),
            institution_markers: words(&["universidad", "instituto", "escuela", "colegio", "academia"]),

            required_skills: table(REQUIRED_SKILLS),
            required_education: table(REQUIRED_EDUCATION),
            languages: words(&["inglés", "español", "francés", "alemán", "portugués"]),
            contract_types: words(&[
                "tiempo completo", "medio tiempo", "remoto", "presencial", "híbrido",
            ]),
            seniority: SeniorityMarkers {
                senior: words(&["senior", "experto", "avanzado", "lead", "principal", "arquitecto"]),
                mid: words(&["semi-senior", "semi senior", "mid-level", "intermedio"]),
                junior: words(&["junior", "trainee", "principiante", "entry level", "recién graduado"]),
            },
            industries: INDUSTRIES
                .iter()
                .map(|(industry, keywords)| IndustryKeywords {
                    industry: industry.to_string(),
                    keywords: words(keywords),
                })
                .collect(),
            keyword_stop_words: words(KEYWORD_STOP_WORDS),
            generic_keyword_terms: words(&["experiencia", "trabajo", "empresa", "puesto", "equipo"]),
            keyword_token_pattern: r"\b[a-záéíóúñ]{4,}\b".to_string(),
            experience_year_patterns: words(&[
                r"(\d+)\s*años?\s*de\s*experiencia",
                r"experiencia\s*:\s*(\d+)\s*años?",
                r"(\d+)\s*años?\s*en\s*[a-z\s]+",
                r"más\s+de\s+(\d+)\s*años",
                r"(\d+)\+?\s*años?",
                r"(\d+)\s*años?\s*de\s*trayectoria",
            ]),
            required_year_patterns: words(&[
                r"(\d+)\s*(\+)?\s*años?\s*de\s*experiencia",
                r"experiencia\s*de\s*(\d+)\s*años?",
                r"mínimo\s*de\s*(\d+)\s*años?",
                r"(\d+)\s*años?\s*en\s*puestos?\s*similares",
            ]),
            period_patterns: words(&[
                r"(\d{4})\s*[-–]\s*(\d{4}|actual|presente)",
                r"desde\s*(\d{4})\s*hasta\s*(\d{4})",
                r"(\w+\s*\d{4})\s*[-–]\s*(\w+\s*\d{4}|presente)",
            ]),
            achievement_patterns: words(&[
                r"increment[oó]\s+en\s+\d+%",
                r"reduj[eo]\s+en\s+\d+%",
                r"aument[oó]\s+de\s+\$?\d+",
                r"ahorr[oó]\s+\$?\d+",
                r"mejor[oó]\s+en\s+\d+%",
                r"\d+\s*%",
                r"\$\d+",
                r"\d+\s*(veces|times)",
            ]),
            linkedin_pattern: r"linkedin\.com/in/\S+".to_string(),
        }
    }
}
