//! SSD1306 register (command) constants.
//!
//! Every command is a single byte sent in command mode. Some commands take
//! their argument in the low bits of the command byte itself
//! (`SET_DISP | 0x01`), others are followed by one or more argument bytes
//! that are also sent in command mode (`SET_CONTRAST`, then the level).

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Set contrast control. Followed by one argument byte (0–255).
pub const SET_CONTRAST: u8 = 0x81;

/// Entire display on. `| 0x00` resumes output from RAM contents,
/// `| 0x01` lights every pixel regardless of RAM.
pub const SET_ENTIRE_ON: u8 = 0xA4;

/// Normal / inverse display. `| 0x01` inverts.
pub const SET_NORM_INV: u8 = 0xA6;

/// Display off (`| 0x00`) or on (`| 0x01`).
pub const SET_DISP: u8 = 0xAE;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Memory addressing mode. Followed by `0x00` for horizontal addressing.
pub const SET_MEM_ADDR: u8 = 0x20;

/// Column address window. Followed by start and end column.
pub const SET_COL_ADDR: u8 = 0x21;

/// Page address window. Followed by start and end page.
pub const SET_PAGE_ADDR: u8 = 0x22;

// ---------------------------------------------------------------------------
// Hardware configuration
// ---------------------------------------------------------------------------

/// Display start line, in the low 6 bits.
pub const SET_DISP_START_LINE: u8 = 0x40;

/// Segment re-map. `| 0x01` maps column 127 to SEG0.
pub const SET_SEG_REMAP: u8 = 0xA0;

/// Multiplex ratio. Followed by `height - 1`.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// COM output scan direction. `| 0x08` scans from COM[N-1] to COM0.
pub const SET_COM_OUT_DIR: u8 = 0xC0;

/// Display offset. Followed by the vertical shift.
pub const SET_DISP_OFFSET: u8 = 0xD3;

/// COM pins hardware configuration. Followed by `0x02` or `0x12`.
pub const SET_COM_PIN_CFG: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing and driving scheme
// ---------------------------------------------------------------------------

/// Display clock divide ratio / oscillator frequency.
pub const SET_DISP_CLK_DIV: u8 = 0xD5;

/// Pre-charge period.
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOMH deselect level.
pub const SET_VCOM_DESEL: u8 = 0xDB;

/// Charge pump setting. Followed by `0x10` (disabled) or `0x14` (enabled).
pub const SET_CHARGE_PUMP: u8 = 0x8D;

// ---------------------------------------------------------------------------
// 2-wire framing
// ---------------------------------------------------------------------------

/// I2C control byte preceding a single command byte (Co = 1, D/C# = 0).
pub const I2C_COMMAND_PREFIX: u8 = 0x80;

/// I2C control byte preceding a stream of display data (Co = 0, D/C# = 1).
pub const I2C_DATA_PREFIX: u8 = 0x40;
