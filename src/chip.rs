//! Peripheral singletons.

embassy_hal_internal::peripherals! {
    // High power pins
    GPIO_6, GPIO_7, GPIO_8, GPIO_9, GPIO_10, GPIO_11, GPIO_12, GPIO_13, GPIO_14, GPIO_15,
    GPIO_16, GPIO_17, GPIO_18, GPIO_19, GPIO_20, GPIO_21, GPIO_22, GPIO_23, GPIO_24, GPIO_25,
    GPIO_26, GPIO_27, GPIO_28, GPIO_29, GPIO_30, GPIO_31, GPIO_32, GPIO_33, GPIO_34, GPIO_35,
    GPIO_36, GPIO_37, GPIO_38, GPIO_39, GPIO_40, GPIO_41, GPIO_42, GPIO_43, GPIO_44, GPIO_45,
    GPIO_46, GPIO_47, GPIO_48, GPIO_49, GPIO_50, GPIO_51, GPIO_52, GPIO_53, GPIO_54, GPIO_55,
    GPIO_56, GPIO_57,

    // Ultra low power pins
    ULP_GPIO_0, ULP_GPIO_1, ULP_GPIO_2, ULP_GPIO_3, ULP_GPIO_4, ULP_GPIO_5, ULP_GPIO_6,
    ULP_GPIO_7, ULP_GPIO_8, ULP_GPIO_9, ULP_GPIO_10, ULP_GPIO_11,

    SSI_MASTER,
    SSI_SLAVE,
    ULP_SSI,

    MCPWM,

    I2S0,
    ULP_I2S,

    QSPI,
}
