//! Content tables — dossier texts, face tokens, alerts, collapse reports.
//!
//! These strings are gameplay data, not cosmetics: the good-citizen dossier
//! pool and the spy cover-story pool are written to be near-indistinguishable
//! on purpose, and tests assert exact pool membership. Treat this module as a
//! versioned data asset — additions bump [`CONTENT_VERSION`], entries are
//! never reworded in place.

/// Bumped whenever any table below changes. Lets fixtures pin expectations.
pub const CONTENT_VERSION: u32 = 1;

// ============================================================================
// DOSSIER TEXT POOLS
// ============================================================================

/// Dossier lines for genuine applicants. All open with the same clerical
/// preamble as the spy pool so nothing but the closing clause differs.
pub static GOOD_DOSSIERS: &[&str] = &[
    "資料顯示：文件齊全，有穩定工作",
    "資料顯示：文件齊全，良民證核發",
    "資料顯示：文件齊全，納稅紀錄良好",
];

/// Cover-story lines for spies. Each reads as plausibly as the good pool;
/// the tell is only that the claims are vague or unverifiable.
pub static SPY_COVER_DOSSIERS: &[&str] = &[
    "資料顯示：文件齊全，無犯罪紀錄",
    "資料顯示：文件齊全，有穩定收入",
    "資料顯示：文件齊全，資金證明充足",
];

/// The single fixed line for welfare-heavy applicants.
pub static RESOURCE_HEAVY_DOSSIER: &str = "資料顯示：一入境就有重大醫療需求";

// ============================================================================
// FACE TOKENS
// ============================================================================

/// Faces drawn uniformly for good applicants and spies alike — a spy never
/// looks different from anyone else.
pub static INNOCENT_FACES: &[&str] = &["🙂", "🧑", "👩", "🧔", "👱"];

/// Fixed token for welfare-heavy applicants.
pub static RESOURCE_HEAVY_FACE: &str = "🤒";

/// Fixed token for pre-session local residents.
pub static LOCAL_FACE: &str = "👶";

// ============================================================================
// DESK ALERTS
// ============================================================================

/// Shown when an admission pushes a local resident out of the pool.
pub static ALERT_DISPLACEMENT: &str = "排擠效應！原本的國民被擠出去了！";

/// Shown when a spy is admitted (and no displacement alert fired first).
pub static ALERT_SPY_ADMITTED: &str = "糟糕！放入了間諜！(隱藏風險)";

/// Shown when a welfare-heavy applicant is admitted.
pub static ALERT_RESOURCE_DRAIN: &str = "社福資源大幅消耗...";

// ============================================================================
// COLLAPSE REPORTS
// ============================================================================

pub static REPORT_INFILTRATION: &str =
    "國家安全崩潰：間諜滲透已達臨界點，政府失去控制能力。";

pub static REPORT_OVER_EXCLUSION: &str =
    "國家安全崩潰：過度排外導致國際孤立，國家信用破產。";

pub static REPORT_RESOURCE_EXHAUSTION: &str =
    "社福資源破產：醫療與財政體系徹底癱瘓，社會發生暴動。";

// ============================================================================
// DEBRIEF COMMENTARY
// ============================================================================

pub static DEBRIEF_COLLAPSE: &str =
    "這就是底線。國家安全與社會資源一旦崩潰，就沒有重來的機會了。這就是為什麼審查制度需要如此謹慎的原因。";

pub static DEBRIEF_FOUR_YEAR_INFILTRATED: &str =
    "門戶洞開！好人跟壞人的資料寫得太像了，時間這麼趕根本分不出來！";

pub static DEBRIEF_FOUR_YEAR_DISPLACED: &str =
    "為了求快，結果把原本的國民都擠出去了（鳩佔鵲巢）。";

pub static DEBRIEF_FOUR_YEAR_LUCKY: &str =
    "運氣好守住了，但這種高風險賭博，現實中玩不起。";

pub static DEBRIEF_SIX_YEAR: &str =
    "雖然慢，但因為時間充裕，系統能查出偽裝成好人的間諜（看到那些紅色標記了嗎？）。這就是「時間」帶來的安全感。";

/// Per-track footnote explaining why spies are (or are not) flagged.
pub static FOOTNOTE_SIX_YEAR: &str =
    "* 6年制因為有時間深度調查，系統會直接幫你標示出異常，讓你不用單靠文字分辨真偽。";

pub static FOOTNOTE_FOUR_YEAR: &str =
    "* 4年制因為時間壓力，你必須在這些極為相似的文字中自行分辨，極易出錯。";

/// True if `text` belongs to the good dossier pool.
pub fn is_good_dossier(text: &str) -> bool {
    GOOD_DOSSIERS.contains(&text)
}

/// True if `text` belongs to the spy cover-story pool.
pub fn is_spy_cover(text: &str) -> bool {
    SPY_COVER_DOSSIERS.contains(&text)
}
