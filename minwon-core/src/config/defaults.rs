//! Compiled default values for all configuration structs.
//!
//! The keyword, code, and category tables reproduce the canonical routing
//! tables shipped with the complaint service. They are configuration data,
//! not an algorithmic contract: any of them can be replaced wholesale via
//! TOML without touching engine code.

// --- Retrieval ---

/// Evidence documents handed to the decision engine per request.
pub const DEFAULT_TOP_K: usize = 3;
/// Each adapter over-fetches `top_k * multiplier` candidates before fusion.
pub const DEFAULT_FETCH_MULTIPLIER: usize = 2;
/// RRF smoothing constant.
pub const DEFAULT_RRF_K: u32 = 60;
/// BM25 Okapi term-frequency saturation.
pub const DEFAULT_BM25_K1: f64 = 1.5;
/// BM25 Okapi length-normalization strength.
pub const DEFAULT_BM25_B: f64 = 0.75;
/// Serialized lexical index location.
pub const DEFAULT_INDEX_PATH: &str = "rag_data/bm25_index.json";
/// Embedding service base URL (Ollama-compatible `/api/embed`).
pub const DEFAULT_EMBEDDING_URL: &str = "http://localhost:11434";
/// Embedding model identifier sent to the service.
pub const DEFAULT_EMBEDDING_MODEL: &str = "paraphrase-multilingual-minilm";
/// Must match the dimensionality of the vectors in the index.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
/// Remote vector index base URL. Empty selects the in-memory index.
pub const DEFAULT_VECTOR_INDEX_URL: &str = "";
/// Per-request HTTP timeout for both remote backends.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

// --- Decision thresholds ---

/// Damping factor applied to evidence whose source is a broad law.
pub const DEFAULT_BROAD_LAW_PENALTY: f64 = 0.35;
/// Score ceiling for the institutional agency absent query context.
pub const DEFAULT_INSTITUTIONAL_SCORE_CAP: f64 = 0.8;
/// Below this winning share the verdict falls back to the catch-all agency.
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.45;
/// Below this top1-top2 margin the verdict falls back to the catch-all agency.
pub const DEFAULT_GAP_FLOOR: f64 = 0.40;
/// Semantic evidence below this normalized score is dropped as noise.
pub const DEFAULT_MIN_SEMANTIC_SCORE: f64 = 0.05;
/// Scoreboard seed for the query-hint agency.
pub const DEFAULT_HINT_SEED_BONUS: f64 = 3.0;
/// Bonus when a keyword matches the document's source identifier.
pub const DEFAULT_SOURCE_MATCH_BONUS: f64 = 0.5;
/// Bonus when an unattributed document falls back to the hint agency.
pub const DEFAULT_HINT_FALLBACK_BONUS: f64 = 0.2;
/// Bonus when evidence attribution and query hint agree.
pub const DEFAULT_AGREEMENT_BONUS: f64 = 1.0;
/// Raw BM25 scores are divided by this before entering a document weight.
pub const DEFAULT_LEXICAL_DAMPING: f64 = 10.0;
/// Leading characters of the document body scanned for keyword attribution.
pub const DEFAULT_SNIPPET_LEN: usize = 700;

// --- Fixed agency roles ---

/// Catch-all agency used whenever no specific agency can be defended.
pub const FALLBACK_AGENCY: &str = "기타";
/// Code emitted when even the catch-all agency is missing from the table.
pub const FALLBACK_AGENCY_CODE: i64 = 38;
/// Category emitted when a code has no category mapping.
pub const FALLBACK_CATEGORY: &str = "기타";
/// Structurally over-represented agency guarded by the score cap.
pub const INSTITUTIONAL_AGENCY: &str = "행정안전부";
/// Agency selected by the weak-term + context conditional upgrade.
pub const CONDITIONAL_UPGRADE_AGENCY: &str = "식품의약품안전처";

// --- Hard rule ---

/// Trigger term: illegal-parking complaints bypass retrieval entirely.
pub const HARD_RULE_TRIGGER: &str = "주정차";
/// Any of these co-occurring with the trigger fires the hard rule.
pub const HARD_RULE_CO_TERMS: &[&str] = &["불법", "단속", "신고", "조치"];
/// Agency the hard rule routes to.
pub const HARD_RULE_AGENCY: &str = "경찰청";

/// Ordered keyword → agency table. First containment match wins, so
/// narrower keywords must come before broader ones (e.g. 도로교통 before
/// 도로). The ordering is a load-time contract.
pub const KEYWORD_TO_AGENCY: &[(&str, &str)] = &[
    // 경찰청 / 치안
    ("도로교통", "경찰청"),
    ("교통위반", "경찰청"),
    ("불법주정차", "경찰청"),
    ("신호위반", "경찰청"),
    ("과속", "경찰청"),
    ("음주운전", "경찰청"),
    // 국토교통부 (교통·건설·시설)
    ("주차장", "국토교통부"),
    ("도로", "국토교통부"),
    ("포트홀", "국토교통부"),
    ("싱크홀", "국토교통부"),
    ("건축", "국토교통부"),
    ("건축물", "국토교통부"),
    ("불법건축", "국토교통부"),
    ("아파트", "국토교통부"),
    ("공동주택", "국토교통부"),
    ("관리비", "국토교통부"),
    ("시설물", "국토교통부"),
    ("지하안전", "국토교통부"),
    ("지반침하", "국토교통부"),
    ("옥외광고", "국토교통부"),
    // 기후에너지환경부 (환경 민원)
    ("환경", "기후에너지환경부"),
    ("악취", "기후에너지환경부"),
    ("냄새", "기후에너지환경부"),
    ("하수", "기후에너지환경부"),
    ("하수구", "기후에너지환경부"),
    ("배수구", "기후에너지환경부"),
    ("오수", "기후에너지환경부"),
    ("정화조", "기후에너지환경부"),
    ("폐수", "기후에너지환경부"),
    ("하천", "기후에너지환경부"),
    ("수질", "기후에너지환경부"),
    ("쓰레기", "기후에너지환경부"),
    ("불법투기", "기후에너지환경부"),
    ("소음", "기후에너지환경부"),
    ("진동", "기후에너지환경부"),
    ("빛공해", "기후에너지환경부"),
    // 소방청
    ("소방", "소방청"),
    ("화재", "소방청"),
    ("소화기", "소방청"),
    ("소화전", "소방청"),
    // 보건복지부
    ("감염병", "보건복지부"),
    ("전염병", "보건복지부"),
    ("보건", "보건복지부"),
    // 식품의약품안전처
    ("식품", "식품의약품안전처"),
    ("위생", "식품의약품안전처"),
    ("이물", "식품의약품안전처"),
    ("이물질", "식품의약품안전처"),
    ("벌레", "식품의약품안전처"),
    ("곰팡이", "식품의약품안전처"),
    ("상했", "식품의약품안전처"),
    ("변질", "식품의약품안전처"),
    ("유통기한", "식품의약품안전처"),
    ("식중독", "식품의약품안전처"),
    ("원산지", "식품의약품안전처"),
    ("알레르기", "식품의약품안전처"),
    ("리콜", "식품의약품안전처"),
    ("회수", "식품의약품안전처"),
    // 고용노동부
    ("근로", "고용노동부"),
    ("노동", "고용노동부"),
    ("임금", "고용노동부"),
    ("체불", "고용노동부"),
    ("해고", "고용노동부"),
    ("월급", "고용노동부"),
    ("급여", "고용노동부"),
    ("돈을 안줘", "고용노동부"),
    ("돈을 안 줘", "고용노동부"),
    ("돈을 못받", "고용노동부"),
    ("급여가 밀", "고용노동부"),
    ("월급이 밀", "고용노동부"),
    // 행정
    ("민원", "국민권익위원회"),
    ("청원", "국민권익위원회"),
    ("지방자치", "행정안전부"),
    // 교육
    ("학교", "교육부"),
    ("교육", "교육부"),
];

/// Weak food-safety indicators that over-trigger on their own.
pub const WEAK_FOOD_TERMS: &[&str] = &["표시", "성분", "불량", "부정", "첨가물"];

/// Food context terms that legitimize a weak food indicator.
pub const FOOD_CONTEXT_TERMS: &[&str] = &[
    "먹", "음식", "빵", "과자", "식당", "유통", "원산지", "제조", "판매", "마트", "구매", "제품",
    "식품", "간식", "음료", "포장", "라벨",
];

/// Agency → numeric code table.
pub const AGENCY_CODES: &[(&str, i64)] = &[
    ("경찰청", 18),
    ("국토교통부", 19),
    ("고용노동부", 20),
    ("국방부", 21),
    ("국민권익위원회", 22),
    ("식품의약품안전처", 23),
    ("대검찰청", 24),
    ("기획재정부", 25),
    ("행정안전부", 26),
    ("보건복지부", 27),
    ("과학기술정보통신부", 28),
    ("국세청", 29),
    ("기후에너지환경부", 30),
    ("법무부", 31),
    ("공정거래위원회", 32),
    ("교육부", 33),
    ("해양수산부", 34),
    ("농림축산식품부", 35),
    ("소방청", 36),
    ("인사혁신처", 37),
    ("기타", 38),
];

/// Code → UI category table.
pub const CODE_CATEGORIES: &[(i64, &str)] = &[
    (18, "경찰·검찰"),
    (24, "경찰·검찰"),
    (31, "경찰·검찰"),
    (19, "교통"),
    (20, "산업·통상"),
    (25, "산업·통상"),
    (28, "산업·통상"),
    (32, "산업·통상"),
    (34, "산업·통상"),
    (35, "산업·통상"),
    (30, "환경"),
    (27, "보건"),
    (23, "보건"),
    (33, "교육"),
    (26, "행정·안전"),
    (36, "행정·안전"),
    (37, "행정·안전"),
    (22, "행정·안전"),
    (21, "행정·안전"),
    (29, "행정·안전"),
    (38, "기타"),
];

/// Statutes so generic they surface for nearly every complaint. Evidence
/// from these sources is weak for any specific agency.
pub const BROAD_LAWS: &[&str] = &[
    "지방자치법",
    "재난 및 안전관리 기본법",
    "행정절차법",
    "행정업무의 효율적 운영",
    "민원 처리",
];

/// Query terms that establish genuine institutional-agency context.
/// Without one of these the institutional agency's score is capped.
pub const INSTITUTIONAL_CONTEXT_TERMS: &[&str] = &[
    // 재난/안전/민방위
    "재난", "안전", "재난문자", "대피", "침수", "호우", "폭설", "지진", "산사태", "민방위",
    "비상대피", "재난지원금",
    // 주민/행정서비스
    "주민등록", "전입", "전입신고", "인감", "주민센터", "행정복지센터", "정부24", "행정서비스",
    "행정절차", "민원처리", "처리기한", "담당부서",
];

// --- Complaint title synthesis ---

/// Location words preferred when summarizing a complaint body.
pub const TITLE_LOCATION_KEYWORDS: &[&str] = &[
    "역", "사거리", "교차로", "학교", "아파트", "공원", "시장", "마트", "주차장", "병원", "센터",
    "도서관", "입구", "출구",
];

/// Complaint-act words used when no location word is present.
pub const TITLE_COMPLAINT_KEYWORDS: &[&str] = &[
    "주정차", "주차", "쓰레기", "악취", "소음", "도로", "가로등", "보수", "신고", "단속", "파손",
    "공사", "흡연",
];

/// Placeholder summary when the complaint body is empty.
pub const TITLE_EMPTY_SUMMARY: &str = "민원 내용";

/// Plain-summary truncation length (characters).
pub const TITLE_SUMMARY_MAX_CHARS: usize = 12;
