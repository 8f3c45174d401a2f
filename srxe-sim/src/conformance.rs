//! Drivers running against the board model

use core::cell::RefCell;

use proptest::prelude::*;
use srxe_drivers::display::{Display, DisplayConfig, DisplayError, DisplayPins, ScrollRegion};
use srxe_drivers::flash::{Flash, FlashConfig, FlashError, FLASH_CS, PAGE_SIZE, SECTOR_SIZE};
use srxe_drivers::font::{self, FontSize};
use srxe_drivers::keyboard::keymap::{K_NONE, K_PGUP};
use srxe_drivers::keyboard::{Keyboard, KeyboardPins};
use srxe_drivers::pixel;
use srxe_drivers::rle::{self, RleHeader};
use srxe_hal::Shared;

use crate::lcd::{RAM_COLUMNS, VISIBLE_LINES};
use crate::{Board, SimDelay};

type SimDisplay<'a> = Display<Shared<'a, Board>, Shared<'a, Board>>;
type SimFlash<'a> = Flash<Shared<'a, Board>, Shared<'a, Board>, SimDelay>;

fn display(board: &RefCell<Board>) -> SimDisplay<'_> {
    let handle = Shared::new(board);
    Display::init(
        handle,
        handle,
        DisplayPins::SRXE,
        DisplayConfig::default(),
        &mut SimDelay::default(),
    )
    .unwrap()
}

fn flash(board: &RefCell<Board>) -> SimFlash<'_> {
    let handle = Shared::new(board);
    Flash::new(handle, handle, FLASH_CS, SimDelay::default(), FlashConfig::default())
}

fn keyboard(board: &RefCell<Board>) -> Keyboard<Shared<'_, Board>> {
    Keyboard::new(Shared::new(board), KeyboardPins::SRXE)
}

// ---- display ----

#[test]
fn test_init_then_fill_lights_whole_screen() {
    let board = RefCell::new(Board::new());
    let mut display = display(&board);
    {
        let b = board.borrow();
        assert!(b.lcd.display_on());
        assert!(b.lcd.gray_mode());
        assert_eq!(b.lcd.vop(), 0x145);
    }

    display.set_position(0, 0, 384, 8).unwrap();
    display.write_data_block(&[0u8; RAM_COLUMNS * 8]).unwrap();
    assert!(board.borrow().lcd.frame()[..RAM_COLUMNS * 8]
        .iter()
        .all(|&b| b == 0));

    display.fill(0xFF).unwrap();
    let b = board.borrow();
    assert!(b.lcd.frame().iter().all(|&byte| byte == 0xFF));
    assert_eq!(b.lcd.errors, 0);
}

#[test]
fn test_fill_blank() {
    let board = RefCell::new(Board::new());
    let mut display = display(&board);
    display.fill(0xFF).unwrap();
    display.fill(0x00).unwrap();
    assert!(board.borrow().lcd.frame().iter().all(|&b| b == 0));
}

#[test]
fn test_rle_bitmap_lands_in_window() {
    let board = RefCell::new(Board::new());
    let mut display = display(&board);

    let header = RleHeader {
        width: 30,
        height: 12,
    };
    let data: Vec<u8> = (0..header.byte_count())
        .map(|i| if i % 10 < 6 { 0xFF } else { i as u8 })
        .collect();
    let stream: heapless::Vec<u8, 512> = rle::encode(header, &data).unwrap();

    display.load_bitmap_rle(60, 40, &stream).unwrap();

    let b = board.borrow();
    for row in 0..12 {
        for col in 0..10 {
            assert_eq!(b.lcd.byte(20 + col, 40 + row), data[row * 10 + col]);
        }
    }
    // Nothing outside the window
    assert_eq!(b.lcd.byte(19, 40), 0);
    assert_eq!(b.lcd.byte(30, 40), 0);
    assert_eq!(b.lcd.byte(20, 52), 0);
}

#[test]
fn test_truncated_bitmap_keeps_decoded_part() {
    let board = RefCell::new(Board::new());
    let mut display = display(&board);

    // 3x2 pixels, only the first line present
    let stream = [3, 0, 2, 0, 0x00, 0xFF];
    assert_eq!(
        display.load_bitmap_rle(0, 0, &stream),
        Err(DisplayError::MalformedBitmap)
    );
    let b = board.borrow();
    assert_eq!(b.lcd.byte(0, 0), 0xFF);
    assert_eq!(b.lcd.byte(0, 1), 0x00);
}

#[test]
fn test_text_matches_font() {
    let board = RefCell::new(Board::new());
    let mut display = display(&board);

    for (size, y) in [
        (FontSize::Normal, 0u16),
        (FontSize::Small, 10),
        (FontSize::Medium, 20),
        (FontSize::Large, 40),
    ] {
        let end = display
            .write_string(3, y, "Ok?", size, pixel::BLACK, pixel::WHITE)
            .unwrap();
        assert_eq!(end, 3 + 3 * size.width());

        let b = board.borrow();
        for (i, ch) in "Ok?".chars().enumerate() {
            let x0 = 3 + i as u16 * size.width();
            for row in 0..size.height() {
                for col in 0..size.width() {
                    let expected = if font::glyph_pixel(size, ch, col, row) {
                        pixel::BLACK
                    } else {
                        pixel::WHITE
                    };
                    assert_eq!(
                        b.lcd.pixel((x0 + col) as usize, (y + row) as usize),
                        expected,
                        "{size:?} '{ch}' at ({col}, {row})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_lines_and_rectangles() {
    let board = RefCell::new(Board::new());
    let mut display = display(&board);

    display.vertical_line(10, 5, 20, pixel::BLACK).unwrap();
    display.horizontal_line(30, 50, 9, 2, 3).unwrap();
    display.rectangle(300, 100, 30, 20, pixel::BLACK, false).unwrap();

    let b = board.borrow();
    for y in 5..25 {
        assert_eq!(b.lcd.pixel(9, y), 0);
        assert_eq!(b.lcd.pixel(10, y), pixel::BLACK);
        assert_eq!(b.lcd.pixel(11, y), 0);
    }
    assert_eq!(b.lcd.pixel(10, 25), 0);

    for y in 50..53 {
        for x in 30..39 {
            assert_eq!(b.lcd.pixel(x, y), 2);
        }
    }

    // Outline: corners and edges set, inside clear
    assert_eq!(b.lcd.pixel(300, 100), pixel::BLACK);
    assert_eq!(b.lcd.pixel(329, 119), pixel::BLACK);
    assert_eq!(b.lcd.pixel(300, 110), pixel::BLACK);
    assert_eq!(b.lcd.pixel(329, 110), pixel::BLACK);
    assert_eq!(b.lcd.pixel(315, 110), 0);
    assert_eq!(b.lcd.errors, 0);
}

#[test]
fn test_scroll_registers_follow_driver_state() {
    let board = RefCell::new(Board::new());
    let mut display = display(&board);

    display.scroll_area(8, 144, 8).unwrap();
    assert_eq!(display.scroll(-1).unwrap(), 143);
    {
        let b = board.borrow();
        assert_eq!(b.lcd.scroll_area(), (8, 144, 8));
        assert_eq!(b.lcd.scroll_start(), 151);
    }

    assert_eq!(
        display.scroll_area(8, 144, 9),
        Err(DisplayError::InvalidScrollArea)
    );
    assert_eq!(board.borrow().lcd.scroll_area(), (8, 144, 8));

    display.scroll_reset().unwrap();
    assert_eq!(board.borrow().lcd.scroll_start(), 8);
    assert_eq!(display.scroll_region(), ScrollRegion::new(8, 144, 8).unwrap());
}

#[test]
fn test_vop_and_power() {
    let board = RefCell::new(Board::new());
    let mut display = display(&board);

    display.increase_vop().unwrap();
    display.increase_vop().unwrap();
    display.decrease_vop().unwrap();
    assert_eq!(board.borrow().lcd.vop(), 0x146);
    assert_eq!(display.vop(), 0x146);

    display.power_down().unwrap();
    assert!(!board.borrow().lcd.display_on());
    display.power_up(&mut SimDelay::default()).unwrap();
    assert!(board.borrow().lcd.display_on());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_window_covers_exactly(
        (x, cx) in (0u16..384).prop_flat_map(|x| (Just(x), 1..=384 - x)),
        (y, cy) in (0u16..136).prop_flat_map(|y| (Just(y), 1..=(136 - y).min(24))),
    ) {
        let board = RefCell::new(Board::new());
        let mut display = display(&board);

        let (col0, cols) = pixel::byte_columns(x, cx);
        display.set_position(x, y, cx, cy).unwrap();
        display
            .write_data_block(&vec![0xFF; cols as usize * cy as usize])
            .unwrap();

        let b = board.borrow();
        for line in 0..VISIBLE_LINES {
            for col in 0..RAM_COLUMNS {
                let inside = (col0 as usize..(col0 + cols) as usize).contains(&col)
                    && (y as usize..(y + cy) as usize).contains(&line);
                prop_assert_eq!(b.lcd.byte(col, line) == 0xFF, inside);
            }
        }
        // Every requested pixel is lit
        for px in x..x + cx {
            prop_assert_eq!(b.lcd.pixel(px as usize, y as usize), pixel::BLACK);
        }
    }

    #[test]
    fn prop_scroll_composes(a in any::<i16>(), b in any::<i16>()) {
        let board = RefCell::new(Board::new());
        let mut display = display(&board);

        display.scroll(a).unwrap();
        let combined = display.scroll(b).unwrap();
        let expected = (a as i32 + b as i32).rem_euclid(160);
        prop_assert_eq!(combined as i32, expected);
        prop_assert_eq!(display.scroll(0).unwrap(), combined);
        prop_assert_eq!(board.borrow().lcd.scroll_start() as i32, expected);
    }
}

// ---- flash ----

#[test]
fn test_erase_then_read_is_blank() {
    let board = RefCell::new(Board::new());
    board.borrow_mut().nor.memory_mut()[0x3000..0x4000].fill(0x12);
    let mut flash = flash(&board);

    flash.erase_sector(0x3ABC, true).unwrap();
    let mut buf = vec![0u8; SECTOR_SIZE];
    assert_eq!(flash.read(0x3000, &mut buf), Ok(SECTOR_SIZE));
    assert!(buf.iter().all(|&b| b == 0xFF));
    // Neighbour untouched
    assert_eq!(board.borrow().nor.memory()[0x2FFF], 0xFF);
    assert_eq!(board.borrow().nor.busy_violations, 0);
}

#[test]
fn test_program_then_read_back() {
    let board = RefCell::new(Board::new());
    let mut flash = flash(&board);

    let mut page = [0u8; PAGE_SIZE];
    for (i, b) in page.iter_mut().enumerate() {
        *b = (i * 7) as u8;
    }
    flash.erase_sector(0x1000, true).unwrap();
    flash.write_page(0x1100, &page).unwrap();

    let mut buf = [0u8; PAGE_SIZE];
    flash.read(0x1100, &mut buf).unwrap();
    assert_eq!(buf, page);

    // Unaligned reads are fine
    let mut tail = [0u8; 5];
    flash.read(0x1100 + 3, &mut tail).unwrap();
    assert_eq!(tail, page[3..8]);
    assert_eq!(board.borrow().nor.busy_violations, 0);
}

#[test]
fn test_misaligned_page_rejected() {
    let board = RefCell::new(Board::new());
    let mut flash = flash(&board);
    assert_eq!(
        flash.write_page(0x1080, &[0u8; PAGE_SIZE]),
        Err(FlashError::Misaligned)
    );
    assert!(board.borrow().nor.memory().iter().all(|&b| b == 0xFF));
    assert!(!board.borrow().nor.write_enabled());
}

#[test]
fn test_never_ready_chip_times_out() {
    let board = RefCell::new(Board::new());
    let mut flash = flash(&board);
    flash.erase_sector(0, true).unwrap();

    board.borrow_mut().nor.never_ready = true;
    assert_eq!(flash.wait_ready(10), Err(FlashError::Timeout));
    // Nothing is sent to a chip that never leaves busy
    assert_eq!(
        flash.write_page(0, &[0u8; PAGE_SIZE]),
        Err(FlashError::Timeout)
    );
    assert_eq!(board.borrow().nor.busy_violations, 0);
}

#[test]
fn test_write_protected_chip_not_acknowledged() {
    let board = RefCell::new(Board::new());
    board.borrow_mut().nor.write_protect = true;
    let mut flash = flash(&board);
    assert_eq!(flash.erase_sector(0, true), Err(FlashError::NotAcknowledged));
}

#[test]
fn test_erase_without_wait_then_poll() {
    let board = RefCell::new(Board::new());
    let mut flash = flash(&board);
    flash.erase_sector(0x5000, false).unwrap();
    assert!(flash.is_busy().unwrap());
    flash.wait_ready(10).unwrap();
    assert!(!flash.is_busy().unwrap());
}

#[test]
fn test_program_after_unwaited_erase() {
    let board = RefCell::new(Board::new());
    board.borrow_mut().nor.memory_mut()[0x2000..0x3000].fill(0x00);
    board.borrow_mut().nor.erase_busy_reads = 20;
    let mut flash = flash(&board);

    flash.erase_sector(0x2000, false).unwrap();
    assert!(board.borrow().nor.write_enabled());

    let page = [0x3Cu8; PAGE_SIZE];
    flash.write_page(0x2000, &page).unwrap();

    let b = board.borrow();
    assert_eq!(b.nor.busy_violations, 0);
    assert_eq!(&b.nor.memory()[0x2000..0x2100], &page[..]);
    assert!(b.nor.memory()[0x2100..0x3000].iter().all(|&x| x == 0xFF));
}

#[test]
fn test_jedec_probe() {
    let board = RefCell::new(Board::new());
    let mut flash = flash(&board);
    let id = flash.read_jedec_id().unwrap();
    assert_eq!(
        [id.manufacturer, id.memory_type, id.capacity],
        board.borrow().nor.id
    );
}

#[test]
fn test_nor_flash_traits() {
    use embedded_storage::nor_flash::{NorFlash, ReadNorFlash};

    let board = RefCell::new(Board::new());
    let mut flash = flash(&board);

    let data: Vec<u8> = (0..2 * PAGE_SIZE).map(|i| (i % 251) as u8).collect();
    NorFlash::erase(&mut flash, 0x8000, 0x9000).unwrap();
    NorFlash::write(&mut flash, 0x8000, &data).unwrap();

    let mut back = vec![0u8; data.len()];
    ReadNorFlash::read(&mut flash, 0x8000, &mut back).unwrap();
    assert_eq!(back, data);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_page_roundtrip(page_index in 0u32..512, seed in any::<u8>()) {
        let board = RefCell::new(Board::new());
        let mut flash = flash(&board);

        let addr = page_index * PAGE_SIZE as u32;
        let mut page = [0u8; PAGE_SIZE];
        for (i, b) in page.iter_mut().enumerate() {
            *b = seed.wrapping_add(i as u8).rotate_left(3);
        }
        flash.write_page(addr, &page).unwrap();

        let mut buf = [0u8; PAGE_SIZE];
        flash.read(addr, &mut buf).unwrap();
        prop_assert_eq!(buf, page);
    }
}

// ---- keyboard ----

#[test]
fn test_keys_through_matrix() {
    let board = RefCell::new(Board::new());
    let mut kb = keyboard(&board);

    assert_eq!(kb.get_key(), K_NONE);

    board.borrow_mut().keypad.press(2, 0);
    assert_eq!(kb.get_key(), b'a');

    board.borrow_mut().keypad.press(3, 0);
    assert_eq!(kb.get_key(), b'A');
    assert_eq!(kb.key_map()[0], 0b001100);

    board.borrow_mut().keypad.release_all();
    board.borrow_mut().keypad.press(3, 0);
    board.borrow_mut().keypad.press(4, 6);
    assert_eq!(kb.get_key(), K_PGUP);
}

#[test]
fn test_power_button() {
    let board = RefCell::new(Board::new());
    let mut kb = keyboard(&board);
    assert!(!kb.power_key());
    board.borrow_mut().keypad.set_power(true);
    assert!(kb.power_key());
}

#[test]
fn test_poll_press_events() {
    let board = RefCell::new(Board::new());
    let mut kb = keyboard(&board);

    board.borrow_mut().keypad.press(0, 4);
    assert_eq!(kb.poll(), Some(b'5'));
    assert_eq!(kb.poll(), None);
    board.borrow_mut().keypad.release(0, 4);
    assert_eq!(kb.poll(), None);
    board.borrow_mut().keypad.press(0, 4);
    assert_eq!(kb.poll(), Some(b'5'));
}

// ---- everything on one board ----

#[test]
fn test_drivers_share_one_board() {
    let board = RefCell::new(Board::new());
    let mut display = display(&board);
    let mut flash = flash(&board);
    let mut kb = keyboard(&board);

    board.borrow_mut().keypad.press(1, 0);
    let key = kb.get_key();
    assert_eq!(key, b'q');

    let mut page = [0xFFu8; PAGE_SIZE];
    page[0] = key;
    flash.write_page(0, &page).unwrap();

    let mut saved = [0u8; 1];
    flash.read(0, &mut saved).unwrap();
    let text = core::str::from_utf8(&saved).unwrap();
    display
        .write_string(0, 0, text, FontSize::Normal, pixel::BLACK, pixel::WHITE)
        .unwrap();

    let b = board.borrow();
    assert_eq!(b.contention, 0);
    assert_eq!(b.lcd.errors, 0);
    assert_eq!(b.nor.busy_violations, 0);
    assert!((0..9).any(|x| (0..8).any(|y| b.lcd.pixel(x, y) == pixel::BLACK)));
}
