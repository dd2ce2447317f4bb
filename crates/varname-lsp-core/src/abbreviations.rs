//! Abbreviation table for object-name words
//!
//! Maps an upper-case word or phrase to its conventional short form. Output
//! casing is stored as it should appear in an identifier.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Keyed by upper-case word or phrase
pub const ABBREVIATION_ENTRIES: &[(&str, &str)] = &[
    ("ABSENCE", "Abs"),
    ("ACCOUNT", "Acc"),
    ("ACCOUNTING", "Acc"),
    ("ACCUMULATED", "Accum"),
    ("ACTION", "Act"),
    ("ACTIVITY", "Activ"),
    ("ADDITIONAL", "Add"),
    ("ADDRESS", "Addr"),
    ("ADJUST", "Adj"),
    ("ADJUSTED", "Adjd"),
    ("ADJUSTMENT", "Adjmt"),
    ("AGREEMENT", "Agrmt"),
    ("ALLOCATION", "Alloc"),
    ("ALLOWANCE", "Allow"),
    ("ALTERNATIVE", "Alt"),
    ("AMOUNT", "Amt"),
    ("AMOUNTS", "Amts"),
    ("ANSWER", "Ans"),
    ("APPLIES", "Appl"),
    ("APPLICATION", "Appln"),
    ("ARRIVAL", "Arriv"),
    ("ASSEMBLY", "Asm"),
    ("ASSEMBLE TO ORDER", "ATO"),
    ("ASSIGNMENT", "Assgnt"),
    ("ASSOCIATED", "Assoc"),
    ("ATTACHMENT", "Attmt"),
    ("AUTHORITIES", "Auth"),
    ("AUTOMATIC", "Auto"),
    ("AVAILABILITY", "Avail"),
    ("AVERAGE", "Avg"),
    ("BA DB.", "BA"),
    ("BALANCE", "Bal"),
    ("BILL OF MATERIALS", "BOM"),
    ("BLANKET", "Blnkt"),
    ("BUDGET", "Budg"),
    ("BUFFER", "Buf"),
    ("BUSINESS", "Bus"),
    ("BUSINESS INTERACTION MANAGEMENT", "BIM"),
    ("BUYING", "Buy"),
    ("CALCULATE", "Calc"),
    ("CALCULATED", "Calcd"),
    ("CALCULATION", "Calcu"),
    ("CALENDAR", "Cal"),
    ("CAPACITY", "Cap"),
    ("CAPACITY REQUIREMENTS PLANNING", "CRP"),
    ("CASH FLOW", "CF"),
    ("CASHFLOW", "CF"),
    ("CATALOG", "ctlg"),
    ("CATEGORY", "Cat"),
    ("CENTRAL PROCESSING UNIT", "CPU"),
    ("CENTER", "Ctr"),
    ("CHANGE", "Chg"),
    ("CHANGES", "Chgs"),
    ("CHARACTER", "Char"),
    ("CHARACTERS", "Chars"),
    ("CHARGE", "Chrg"),
    ("CHARGES", "Chrgs"),
    ("CHECK", "Chk"),
    ("CLASSIFICATION", "Class"),
    ("COLLECTION", "coll"),
    ("COLUMN", "col"),
    ("COMMENT", "Cmt"),
    ("COMPANY", "Co"),
    ("COMPONENT", "Comp"),
    ("COMPLETION", "Cmpltn"),
    ("COMPONENTS", "Comps"),
    ("COMPOSITION", "Compn"),
    ("COMPRESSION", "Compr"),
    ("CONCURRENT", "Concrnt"),
    ("CONFIDENTIAL", "Conf"),
    ("CONFIRMATION", "Cnfrmn"),
    ("CONFLICT", "Confl"),
    ("CONSOLIDATE", "Consol"),
    ("CONSOLIDATION", "Consolid"),
    ("CONSUMPTION", "Consump"),
    ("CONTACT", "Cont"),
    ("CONTAINER", "Cntr"),
    ("CONTRACT", "Contr"),
    ("CONTRACTED", "Contrd"),
    ("CONTROL", "Ctrl"),
    ("CONTROLS", "Ctrls"),
    ("CONVERSION", "Conv"),
    ("CORRECTION", "Cor"),
    ("CORRESPONDENCE", "Corres"),
    ("CORRESPONDING", "Corresp"),
    ("COST", "Cst"),
    ("SOLD", "COGS"),
    ("CREDIT", "Cr"),
    ("CUMULATE", "Cumul"),
    ("CURRENCY", "Curr"),
    ("CURRENT", "Crnt"),
    ("CUSTOMER", "Cust"),
    ("CUSTOMER/VENDOR", "CV"),
    ("DAILY", "Dly"),
    ("DAMPENER", "Damp"),
    ("DATABASE MANAGEMENT SYSTEM", "DBMS"),
    ("DATE", "D"),
    ("DEFINITION", "Def"),
    ("DEMONSTRATION", "Demo"),
    ("DEPARTMENT", "Dept"),
    ("DEPARTMENT/PROJECT", "DP"),
    ("DEPRECIATION", "Depr"),
    ("DESCRIPTION", "Desc"),
    ("DETAIL", "Dtl"),
    ("DETAILED", "Dtld"),
    ("DETAILS", "Dtls"),
    ("DEVIATION", "Dev"),
    ("DIFFERENCE", "Diff"),
    ("DIMENSION", "Dim"),
    ("DIRECT", "Dir"),
    ("DISCOUNT", "Disc"),
    ("DISCRETE", "Discr"),
    ("DISTRIBUTE", "Distr"),
    ("DISTRIBUTED", "Distrd"),
    ("DISTRIBUTOR", "Distbtr"),
    ("DISTRIBUTION", "Distrn"),
    ("DOCUMENT", "Doc"),
    ("DUPLICATE", "Dupl"),
    ("ENTERED", "Entrd"),
    ("ENGINEERING", "Engin"),
    ("EXCHANGE", "Exch"),
    ("EXCLUDING", "Excl"),
    ("EXECUTE", "Exec"),
    ("EXPECTED", "Expd"),
    ("EXPEDITED", "Exped"),
    ("EXPENSE", "Exp"),
    ("EXPRESSION", "Expr"),
    ("EXPIRATION", "Expir"),
    ("EXTENDED", "Ext"),
    ("EXPLODE", "Expl"),
    ("EXPORT", "Expt"),
    ("FINAL", "Fnl"),
    ("FINANCE", "Fin"),
    ("FISCAL", "Fisc"),
    ("FINISHED", "Fnshd"),
    ("FIXED ASSET", "FA"),
    ("FORWARD", "Fwd"),
    ("FREIGHT", "Frt"),
    ("GENERAL", "Gen"),
    ("GENERAL LEDGER", "GL"),
    ("GROUP", "Gr"),
    ("HEADER", "Hdr"),
    ("HISTORY", "Hist"),
    ("HOLIDAY", "Hol"),
    ("HUMAN RESOURCE", "HR"),
    ("IDENTIFICATION", "ID"),
    ("IMPORT", "Imp"),
    ("INBOUND", "Inbnd"),
    ("INCLUDING", "Incl"),
    ("INCLUDED", "Incld"),
    ("INCOMING", "Incmg"),
    ("INDEPENDENT SOFTWARE VENDOR", "ISV"),
    ("INDUSTRY", "Indust"),
    ("INFORMATION", "Info"),
    ("INITIAL", "Init"),
    ("INTRASTAT", "Intra"),
    ("INTERACTION", "Interact"),
    ("INTEGRATION", "Integr"),
    ("INTEREST", "Int"),
    ("INTERIM", "Intm"),
    ("INTERNAL PROTOCOL", "IP"),
    ("INVENTORY", "Invt"),
    ("INVENTORIABLE", "Invtbl"),
    ("INVOICE", "Inv"),
    ("INVOICED", "Invd"),
    ("ITEM TRACKING", "IT"),
    ("JOURNAL", "Jnl"),
    ("LANGUAGE", "Lang"),
    ("LEDGER", "Ledg"),
    ("LEVEL", "Lvl"),
    ("LINE", "Ln"),
    ("LIST", "Lt"),
    ("LOCAL CURRENCY", "LCY"),
    ("LOCATION", "Loc"),
    ("MAILING", "Mail"),
    ("MAINTENANCE", "Maint"),
    ("MANAGEMENT", "Mgt"),
    ("MANUAL", "Man"),
    ("MANUFACTURING", "Mfg"),
    ("MANUFACTURER", "Mfr"),
    ("MATERIAL", "Mat"),
    ("MARKETING", "Mktg"),
    ("MAXIMUM", "Max"),
    ("MEASURE", "Meas"),
    ("MESSAGE", "Msg"),
    ("MINIMUM", "Min"),
    ("MISCELLANEOUS", "Misc"),
    ("MODIFY", "Mod"),
    ("MONTH", "Mth"),
    ("NEGATIVE", "Neg"),
    ("NON-INVENTORIABLE", "NonInvtbl"),
    ("NOTIFICATION", "Notif"),
    ("NUMBER", "No"),
    ("NUMBERS", "Nos"),
    ("OBJECT", "Obj"),
    ("OPERATING", "Oper"),
    ("OPPORTUNITY", "Opp"),
    ("ORDER", "Ord"),
    ("ORDERS", "Ords"),
    ("ORIGINAL", "Orig"),
    ("ORGANIZATION", "Org"),
    ("OUTBOUND", "Outbnd"),
    ("OUTGOING", "Outg"),
    ("OUTPUT", "Out"),
    ("OUTSTANDING", "Outstd"),
    ("OVERHEAD", "Ovhd"),
    ("PAYMENT", "Pmt"),
    ("PERCENT", "Pct"),
    ("PERSONNEL", "Persnl"),
    ("PHYSICAL", "Phys"),
    ("PICTURE", "Pic"),
    ("PLANNING", "Plng"),
    ("POSTED", "Pstd"),
    ("POSTING", "Post"),
    ("POSITIVE", "Pos"),
    ("PRECISION", "Prec"),
    ("PREPAYMENT", "Prepmt"),
    ("PRODUCT", "Prod"),
    ("PRODUCTION", "Prod"),
    ("PROJECT", "Proj"),
    ("PROPERTY", "Prop"),
    ("PROSPECT", "Prspct&nbsp;&nbsp"),
    ("PURCHASE", "Purch"),
    ("PURCHASES", "Purch"),
    ("PURCHASER", "Purchr"),
    ("PURCHASE ORDER", "PurchOrd"),
    ("QUALITY", "Qlty"),
    ("QUANTITY", "Qty"),
    ("QUESTIONNAIRE", "Questn"),
    ("QUOTE", "Qte"),
    ("RADIO FREQUENCY", "RF"),
    ("RANGE", "Rng"),
    ("RECEIPT", "Rcpt"),
    ("RECEIVED", "Rcd"),
    ("RECORD", "Rec"),
    ("RECORDS", "Recs"),
    ("RECONCILE", "Recncl"),
    ("RECONCILIATION", "Recon"),
    ("RECURRING", "Recur"),
    ("REFERENCE", "Ref"),
    ("REGISTER", "Reg"),
    ("REGISTRATION", "Regn"),
    ("REGISTERED", "Regd"),
    ("RELATION", "Rel"),
    ("RELATIONS", "Rels"),
    ("RELATIONSHIP", "Rlshp"),
    ("RELEASE", "Rlse"),
    ("RELEASED", "Rlsd"),
    ("REMAINING", "Rem"),
    ("REMINDER", "Rmdr"),
    ("REPLACEMENT", "Repl"),
    ("REPLENISH", "Rplnsh"),
    ("REPLENISHMENT", "Rplnsht"),
    ("REPORT", "Rpt"),
    ("REPRESENT", "Rep"),
    ("REPRESENTED", "Repd"),
    ("REQUEST", "Rqst"),
    ("REQUIRED", "Reqd"),
    ("REQUIREMENT", "Reqt"),
    ("REQUIREMENTS", "Reqts"),
    ("REQUISITION", "Req"),
    ("RESERVE", "Rsv"),
    ("RESERVED", "Rsvd"),
    ("RESERVATION", "Reserv"),
    ("RESOLUTION", "Resol"),
    ("RESOURCE", "Res"),
    ("RESPONSE", "Rsp"),
    ("RESPONSIBILITY", "Resp"),
    ("RETAIN", "Rtn"),
    ("RETAINED", "Rtnd"),
    ("RETURN", "Ret"),
    ("RETURNS", "Rets"),
    ("REVALUATION", "Revaln"),
    ("REVERSE", "Rev"),
    ("REVIEW", "Rvw"),
    ("ROUND", "Rnd"),
    ("ROUNDED", "Rndd"),
    ("ROUNDING", "Rndg"),
    ("ROUTE", "Rte"),
    ("ROUTING", "Rtng"),
    ("ROUTINE", "Rout"),
    ("SALES AND RECEIVABLES", "Sales"),
    ("SAFETY", "Saf"),
    ("SCHEDULE", "Sched"),
    ("SECOND", "Sec"),
    ("SEGMENT", "Seg"),
    ("SELECT", "Sel"),
    ("SELECTION", "Selctn"),
    ("SEQUENCE", "Seq"),
    ("SERIAL", "Ser"),
    ("SERIAL NUMBER", "SN"),
    ("SERVICE", "Serv"),
    ("SHEET", "Sh"),
    ("SHIPMENT", "Shpt"),
    ("SOURCE", "Src"),
    ("SPECIAL", "Spcl"),
    ("SPECIFICATION", "Spec"),
    ("SPECIFICATIONS", "Specs"),
    ("STANDARD", "Std"),
    ("FREQUENCY", "SF"),
    ("STATEMENT", "Stmt"),
    ("STATISTICAL", "Stat"),
    ("STATISTICS", "Stats"),
    ("STOCK", "Stk"),
    ("STOCKKEEPING UNIT", "SKU"),
    ("STREAM", "Stm"),
    ("STRUCTURED QUERY LANGUAGE", "SQL"),
    ("SUBCONTRACT", "Subcontr"),
    ("SUBCONTRACTED", "Subcontrd"),
    ("SUBCONTRACTING", "Subcontrg"),
    ("SUBSTITUTE", "Sub"),
    ("SUBSTITUTION", "Subst"),
    ("SUGGEST", "Sug"),
    ("SUGGESTED", "Sugd"),
    ("SUGGESTION", "Sugn"),
    ("SUMMARY", "Sum"),
    ("SUSPENDED", "Suspd"),
    ("SYMPTOM", "Sympt"),
    ("SYNCHRONIZE", "Synch"),
    ("TEMPORARY", "Temp"),
    ("TOTAL", "Tot"),
    ("TRANSACTION", "Transac"),
    ("TRANSFER", "Trans"),
    ("TRANSLATION", "Transln"),
    ("TRACKING", "Trkg"),
    ("TROUBLESHOOT", "Tblsht"),
    ("TROUBLESHOOTING", "Tblshtg"),
    ("UNIT OF MEASURE", "UOM"),
    ("UNIT TEST", "UT"),
    ("UNREALIZED", "Unreal"),
    ("UNRESERVED", "Unrsvd"),
    ("UPDATE", "Upd"),
    ("VALUATION", "Valn"),
    ("VALUE", "Val"),
    ("VALUE ADDED TAX", "VAT"),
    ("VARIANCE", "Var"),
    ("VENDOR", "Vend"),
    ("WAREHOUSE", "Whse"),
    ("WEB SERVICE", "WS"),
    ("WORKSHEET", "Wksh"),
    ("G/L", "GL"),
    ("%", "Pct"),
    ("3-TIER", "Three-Tier"),
    ("OUTLOOK SYNCH", "Osynch"),
];

static ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ABBREVIATION_ENTRIES.iter().copied().collect());

/// Get the abbreviation map
pub fn abbreviations() -> &'static HashMap<&'static str, &'static str> {
    &ABBREVIATIONS
}

/// Look up the abbreviation for a word, ignoring case
pub fn lookup(word: &str) -> Option<&'static str> {
    ABBREVIATIONS.get(word.to_uppercase().as_str()).copied()
}

/// Abbreviate a single word, passing unknown words through unchanged
pub fn abbreviate_word(word: &str) -> &str {
    lookup(word).unwrap_or(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        assert_eq!(abbreviations().len(), ABBREVIATION_ENTRIES.len());
    }

    #[test]
    fn test_keys_are_upper_case() {
        for (key, _) in ABBREVIATION_ENTRIES {
            assert_eq!(*key, key.to_uppercase(), "key {key:?} is not upper case");
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(lookup("general"), Some("Gen"));
        assert_eq!(lookup("Ledger"), Some("Ledg"));
        assert_eq!(lookup("JOURNAL"), Some("Jnl"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("Setup"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_percent_and_three_tier_are_distinct() {
        assert_eq!(lookup("%"), Some("Pct"));
        assert_eq!(lookup("3-tier"), Some("Three-Tier"));
    }

    #[test]
    fn test_production_keeps_first_mapping() {
        assert_eq!(lookup("Production"), Some("Prod"));
    }

    #[test]
    fn test_phrases_and_punctuated_keys() {
        assert_eq!(lookup("Bill of Materials"), Some("BOM"));
        assert_eq!(lookup("g/l"), Some("GL"));
        assert_eq!(lookup("Customer/Vendor"), Some("CV"));
    }

    #[test]
    fn test_abbreviate_word_passthrough() {
        assert_eq!(abbreviate_word("Customer"), "Cust");
        assert_eq!(abbreviate_word("Setup"), "Setup");
    }
}
