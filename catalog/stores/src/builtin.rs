use catalog::part::{Part, PartStatus};
use catalog::pricing::PricingTier;
use rust_decimal_macros::dec;

/// The demonstration catalog, compiled into the binary.
///
/// Some entries are intentionally inconsistent (e.g. an obsolete part with stock on hand), as real
/// distributor data often is.
pub fn builtin_parts() -> Vec<Part> {
    vec![
        Part::new("1", "STM32F407VGT6", "STMicroelectronics")
            .with_description("ARM Cortex-M4 MCU, 1MB Flash, 168MHz, LQFP-100")
            .with_category("Microcontrollers")
            .with_stock(12450, PartStatus::InStock)
            .with_price(dec!(8.25), "USD")
            .with_pricing_tiers(vec![
                PricingTier::new(1, dec!(8.25)),
                PricingTier::new(10, dec!(7.60)),
                PricingTier::new(100, dec!(6.95)),
            ])
            .with_spec("Core", "ARM Cortex-M4")
            .with_spec("Flash", "1MB")
            .with_spec("Frequency", "168MHz")
            .with_spec("Package", "LQFP-100")
            .with_datasheet_url("https://www.st.com/resource/en/datasheet/stm32f407vg.pdf")
            .with_rohs(true),
        Part::new("2", "STM32F103C8T6", "STMicroelectronics")
            .with_description("ARM Cortex-M3 MCU, 64KB Flash, 72MHz, LQFP-48")
            .with_category("Microcontrollers")
            .with_stock(0, PartStatus::LeadTime)
            .with_price(dec!(3.10), "USD")
            .with_pricing_tiers(vec![
                PricingTier::new(1, dec!(3.10)),
                PricingTier::new(100, dec!(2.65)),
            ])
            .with_spec("Core", "ARM Cortex-M3")
            .with_spec("Flash", "64KB")
            .with_spec("Package", "LQFP-48")
            .with_rohs(true),
        Part::new("3", "ATMEGA328P-PU", "Microchip")
            .with_description("8-bit AVR MCU, 32KB Flash, 20MHz, DIP-28")
            .with_category("Microcontrollers")
            .with_stock(860, PartStatus::LowStock)
            .with_price(dec!(2.89), "USD")
            .with_pricing_tiers(vec![
                PricingTier::new(1, dec!(2.89)),
                PricingTier::new(25, dec!(2.60)),
            ])
            .with_spec("Core", "AVR")
            .with_spec("Flash", "32KB")
            .with_spec("Package", "DIP-28")
            .with_datasheet_url("https://ww1.microchip.com/downloads/en/DeviceDoc/ATmega328P.pdf")
            .with_rohs(true),
        Part::new("4", "ESP32-WROOM-32E", "Espressif")
            .with_description("Wi-Fi + Bluetooth LE module, dual-core 240MHz, 4MB Flash")
            .with_category("RF Modules")
            .with_stock(5300, PartStatus::InStock)
            .with_price(dec!(3.45), "USD")
            .with_pricing_tiers(vec![
                PricingTier::new(1, dec!(3.45)),
                PricingTier::new(50, dec!(3.05)),
            ])
            .with_spec("Flash", "4MB")
            .with_spec("Wireless", "Wi-Fi, Bluetooth LE")
            .with_rohs(true),
        Part::new("5", "LM7805CT", "Texas Instruments")
            .with_description("Positive linear voltage regulator, 5V 1.5A, TO-220")
            .with_category("Power Management")
            .with_stock(0, PartStatus::Obsolete)
            .with_price(dec!(0.62), "USD")
            .with_pricing_tiers(vec![PricingTier::new(1, dec!(0.62))])
            .with_spec("Output Voltage", "5V")
            .with_spec("Package", "TO-220"),
        Part::new("6", "NE555P", "Texas Instruments")
            .with_description("Precision timer, single, DIP-8")
            .with_category("Timers")
            .with_stock(24000, PartStatus::InStock)
            .with_price(dec!(0.38), "USD")
            .with_pricing_tiers(vec![
                PricingTier::new(1, dec!(0.38)),
                PricingTier::new(100, dec!(0.29)),
                PricingTier::new(1000, dec!(0.22)),
            ])
            .with_spec("Package", "DIP-8")
            .with_rohs(true),
        Part::new("7", "TPS62160DGKR", "Texas Instruments")
            .with_description("3-17V 1A step-down converter, VSSOP-8")
            .with_category("Power Management")
            .with_stock(0, PartStatus::LowStock)
            .with_price(dec!(1.75), "USD")
            .with_pricing_tiers(vec![
                PricingTier::new(1, dec!(1.75)),
                PricingTier::new(250, dec!(1.32)),
            ])
            .with_spec("Output Current", "1A")
            .with_rohs(true),
        Part::new("8", "MAX232CPE", "Analog Devices")
            .with_description("Dual RS-232 driver/receiver, DIP-16")
            .with_category("Interface")
            .with_stock(140, PartStatus::Obsolete)
            .with_price(dec!(4.10), "USD")
            .with_pricing_tiers(vec![PricingTier::new(1, dec!(4.10))])
            .with_spec("Package", "DIP-16"),
        Part::new("9", "AD8605ARTZ", "Analog Devices")
            .with_description("Precision CMOS rail-to-rail op amp, SOT-23-5")
            .with_category("Amplifiers")
            .with_stock(0, PartStatus::Rfq)
            .with_spec("Channels", "1")
            .with_spec("Package", "SOT-23-5")
            .with_rohs(true),
        Part::new("10", "GRM188R71H104KA93D", "Murata")
            .with_description("Ceramic capacitor 0.1uF 50V X7R 0603")
            .with_category("Passive Components")
            .with_stock(980000, PartStatus::InStock)
            .with_price(dec!(0.01), "USD")
            .with_pricing_tiers(vec![
                PricingTier::new(100, dec!(0.01)),
                PricingTier::new(4000, dec!(0.004)),
            ])
            .with_spec("Capacitance", "0.1uF")
            .with_spec("Voltage", "50V")
            .with_spec("Package", "0603")
            .with_rohs(true),
        Part::new("11", "PIC16F877A-I/P", "Microchip")
            .with_description("8-bit PIC MCU, 14KB Flash, DIP-40")
            .with_category("Microcontrollers")
            .with_stock(0, PartStatus::LeadTime)
            .with_price(dec!(5.40), "USD")
            .with_pricing_tiers(vec![PricingTier::new(1, dec!(5.40))])
            .with_spec("Package", "DIP-40")
            .with_rohs(true),
        Part::new("12", "NRF52840-QIAA-R", "Nordic Semiconductor")
            .with_description("Bluetooth 5 SoC, ARM Cortex-M4F, 1MB Flash, aQFN-73")
            .with_category("RF Modules")
            .with_stock(2100, PartStatus::LeadTime)
            .with_price(dec!(5.95), "USD")
            .with_pricing_tiers(vec![
                PricingTier::new(1, dec!(5.95)),
                PricingTier::new(100, dec!(5.10)),
            ])
            .with_spec("Core", "ARM Cortex-M4F")
            .with_spec("Flash", "1MB")
            .with_rohs(true),
    ]
}
