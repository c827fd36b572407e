//! The two renderings of the record list.
//!
//! [`editor_view`] and [`print_view`] are pure functions of the same record
//! snapshot; neither owns state. Labels are fixed to the zh-TW locale.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::aggregate::{format_currency, parse_amount, Summary};
use crate::config::SheetConfig;
use crate::model::{Record, RecordId, MAX_IMAGE_HEIGHT, MIN_IMAGE_HEIGHT};

pub mod labels {
    pub const EDITOR_TITLE: &str = "簽收單表格生成器";
    pub const EDITOR_SUBTITLE: &str = "支援拖拉調整影像高度、貼上/上傳簽收單，快速產出列印表格。";
    pub const ADD_RECORD: &str = "新增一筆";
    pub const PRINT_TABLE: &str = "列印表格";
    pub const PRINT_DETAILS: &str = "列印明細";
    pub const PASTE_HINT: &str = "提示：點擊簽收單區塊後按 Ctrl + V 可直接貼上截圖；或點擊上傳圖檔。";
    pub const IMAGE_PLACEHOLDER: &str = "點擊上傳或 Ctrl+V 貼上";
    pub const IMAGE_ALT: &str = "簽收單";
    pub const IMAGE_HEIGHT: &str = "影像高度";
    pub const DRIVER_NAME: &str = "司機名稱";
    pub const DRIVER_NAME_PLACEHOLDER: &str = "輸入司機姓名";
    pub const AMOUNT: &str = "需收款金額";
    pub const AMOUNT_PLACEHOLDER: &str = "0";
    pub const NOTE: &str = "備註";
    pub const NOTE_PLACEHOLDER: &str = "補充說明...";
    pub const DELETE: &str = "刪除";
    pub const TOTAL_COUNT: &str = "總筆數";
    pub const TOTAL_AMOUNT: &str = "總金額";

    pub const PRINT_TITLE: &str = "簽收單補收款項明細";
    pub const PRINT_DATE_PREFIX: &str = "製表日期：";
    pub const PRINT_REPORTER_PREFIX: &str = "製表人：";
    pub const PRINT_IMAGE_COLUMN: &str = "簽收單影像";
    pub const PRINT_IMAGE_PLACEHOLDER: &str = "未附影像";
    pub const PRINT_EMPTY_DRIVER: &str = "--";
    pub const PRINT_COUNT_PREFIX: &str = "合計筆數：";
    pub const PRINT_COUNT_SUFFIX: &str = " 筆";
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecordCard {
    pub id: RecordId,
    pub is_active: bool,
    pub driver_name: String,
    /// Unformatted, exactly as typed.
    pub amount: String,
    pub note: String,
    pub image: Option<String>,
    pub image_placeholder: String,
    pub image_height: u16,
    pub image_height_min: u16,
    pub image_height_max: u16,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SummaryView {
    pub count: usize,
    pub total: f64,
    pub total_text: String,
}

impl SummaryView {
    fn new(summary: Summary, config: &SheetConfig) -> Self {
        Self {
            count: summary.count,
            total: summary.total,
            total_text: format_currency(&config.currency_prefix, summary.total),
        }
    }
}

/// Static text shared by every card.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardLabels {
    pub image_alt: String,
    pub image_height: String,
    pub driver_name: String,
    pub driver_name_placeholder: String,
    pub amount: String,
    pub amount_placeholder: String,
    pub note: String,
    pub note_placeholder: String,
    pub delete: String,
    pub total_count: String,
    pub total_amount: String,
}

impl Default for CardLabels {
    fn default() -> Self {
        Self {
            image_alt: labels::IMAGE_ALT.to_owned(),
            image_height: labels::IMAGE_HEIGHT.to_owned(),
            driver_name: labels::DRIVER_NAME.to_owned(),
            driver_name_placeholder: labels::DRIVER_NAME_PLACEHOLDER.to_owned(),
            amount: labels::AMOUNT.to_owned(),
            amount_placeholder: labels::AMOUNT_PLACEHOLDER.to_owned(),
            note: labels::NOTE.to_owned(),
            note_placeholder: labels::NOTE_PLACEHOLDER.to_owned(),
            delete: labels::DELETE.to_owned(),
            total_count: labels::TOTAL_COUNT.to_owned(),
            total_amount: labels::TOTAL_AMOUNT.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EditorView {
    pub title: String,
    pub subtitle: String,
    pub add_label: String,
    pub print_label: String,
    pub paste_hint: String,
    pub currency_prefix: String,
    pub labels: CardLabels,
    pub cards: Vec<RecordCard>,
    pub summary: SummaryView,
    pub footer_print_label: String,
}

pub fn editor_view(
    records: &[Record],
    active_id: Option<&RecordId>,
    config: &SheetConfig,
) -> EditorView {
    let cards = records
        .iter()
        .map(|record| RecordCard {
            id: record.id.clone(),
            is_active: active_id == Some(&record.id),
            driver_name: record.driver_name.clone(),
            amount: record.amount.clone(),
            note: record.note.clone(),
            image: record.image.as_ref().map(|uri| uri.as_str().to_owned()),
            image_placeholder: labels::IMAGE_PLACEHOLDER.to_owned(),
            image_height: record.image_height.get(),
            image_height_min: MIN_IMAGE_HEIGHT,
            image_height_max: MAX_IMAGE_HEIGHT,
        })
        .collect();

    EditorView {
        title: labels::EDITOR_TITLE.to_owned(),
        subtitle: labels::EDITOR_SUBTITLE.to_owned(),
        add_label: labels::ADD_RECORD.to_owned(),
        print_label: labels::PRINT_TABLE.to_owned(),
        paste_hint: labels::PASTE_HINT.to_owned(),
        currency_prefix: config.currency_prefix.clone(),
        labels: CardLabels::default(),
        cards,
        summary: SummaryView::new(Summary::of(records), config),
        footer_print_label: labels::PRINT_DETAILS.to_owned(),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PrintImage {
    Image { src: String, height: u16 },
    Placeholder { text: String },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrintRow {
    pub id: RecordId,
    pub image: PrintImage,
    pub driver_name: String,
    pub amount_text: String,
    pub note: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrintFooter {
    pub count_text: String,
    pub total_text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrintReport {
    pub title: String,
    pub date_text: String,
    pub reporter_text: String,
    pub columns: [String; 4],
    pub rows: Vec<PrintRow>,
    pub footer: PrintFooter,
}

/// zh-TW short date: `2026/1/5`, no zero padding.
pub fn format_print_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

pub fn print_view(records: &[Record], today: NaiveDate, config: &SheetConfig) -> PrintReport {
    let rows = records
        .iter()
        .map(|record| PrintRow {
            id: record.id.clone(),
            image: match &record.image {
                Some(uri) => PrintImage::Image {
                    src: uri.as_str().to_owned(),
                    height: record.image_height.get(),
                },
                None => PrintImage::Placeholder {
                    text: labels::PRINT_IMAGE_PLACEHOLDER.to_owned(),
                },
            },
            driver_name: if record.driver_name.is_empty() {
                labels::PRINT_EMPTY_DRIVER.to_owned()
            } else {
                record.driver_name.clone()
            },
            amount_text: format_currency(&config.currency_prefix, parse_amount(&record.amount)),
            note: record.note.clone(),
        })
        .collect();

    let summary = Summary::of(records);

    PrintReport {
        title: labels::PRINT_TITLE.to_owned(),
        date_text: format!("{}{}", labels::PRINT_DATE_PREFIX, format_print_date(today)),
        reporter_text: format!("{}{}", labels::PRINT_REPORTER_PREFIX, config.reporter_name),
        columns: [
            labels::PRINT_IMAGE_COLUMN.to_owned(),
            labels::DRIVER_NAME.to_owned(),
            labels::AMOUNT.to_owned(),
            labels::NOTE.to_owned(),
        ],
        rows,
        footer: PrintFooter {
            count_text: format!(
                "{}{}{}",
                labels::PRINT_COUNT_PREFIX,
                summary.count,
                labels::PRINT_COUNT_SUFFIX
            ),
            total_text: format_currency(&config.currency_prefix, summary.total),
        },
    }
}
