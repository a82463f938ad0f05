//! 画面表示ラベル
//!
//! 全フロントエンドで同じ文言を使う。

pub const PAGE_TITLE: &str = "จัดการข้อมูลสินค้า";

pub const NAME_LABEL: &str = "ชื่อสินค้า";
pub const PRICE_LABEL: &str = "ราคา";
pub const IMAGE_LABEL: &str = "รูปภาพ";
pub const IMAGE_PLACEHOLDER: &str = "URL รูปภาพ";

pub const SAVE_BUTTON: &str = "บันทึก";
pub const CLEAR_BUTTON: &str = "เคลียร์";
pub const DELETE_BUTTON: &str = "ลบ";
pub const CONFIRM_BUTTON: &str = "ยืนยัน";
pub const CANCEL_BUTTON: &str = "ยกเลิก";

pub const NO_COLUMN: &str = "No.";
pub const ACTIONS_COLUMN: &str = "ดำเนินการ";
/// テーブルのヘッダー（表示順）
pub const TABLE_HEADERS: [&str; 5] = [NO_COLUMN, NAME_LABEL, PRICE_LABEL, IMAGE_LABEL, ACTIONS_COLUMN];

pub const EMPTY_TABLE: &str = "ยังไม่มีสินค้าที่เพิ่ม";
pub const NO_IMAGE: &str = "ไม่มีรูปภาพ";

pub const DELETE_QUESTION: &str = "คุณต้องการลบสินค้านี้หรือไม่?";
pub const VALIDATION_NOTICE: &str = "กรุณากรอกข้อมูลให้ครบถ้วน";
pub const INVALID_PRICE_NOTICE: &str = "ราคาไม่ถูกต้อง";
