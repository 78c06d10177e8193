//! Description and cite backfill for charge codes the source system
//! prints without them.
//!
//! The table mirrors the source system's code book. A handful of codes
//! appear twice; the later row is the corrected one and wins.

/// (code, description, cite), in code-book order.
static FILLERS: &[(&str, &str, &str)] = &[
    ("PFI3", "POSSESS FORGED INSTRUMENT 3RD", "13A-009-006.1"),
    ("NWNI", "NEGOTIATING WORTHLESS INST", "13A-009-013.1"),
    ("VDR1", "USE/POSSESS DRUG PARAPHERNALIA", "13A-012-260(C)"),
    ("UPCS", "POSS. CONTR. SUBS", "13A-012-212(A)"),
    ("FRCC", "FRAUD USE CREDIT/DEBIT CARD", "13A-012-212(A)"),
    ("T003", "NO DRIVERS LICENSE", "032-006-001(A)"),
    ("PMIO", "PORN POSS MATERIAL MINORS", "13A-012-192(B)"),
    ("UPCC", "POSS CONTR SUBS INTENT DISTRIB", "013-012-192(B)"),
    ("BEMV", "BREAK/ENTER VEHICLE", "13A-008-011(B)"),
    ("HARA", "HARASSMENT", "13A-011-008(A)"),
    ("TET3", "THEFT OF PROPERTY 3RD DEGREE", "13A-008-004.1"),
    ("T042", "OVERWEIGHT TRUCK", "032-009-020(4)"),
    ("T707", "FAIL DISPLAY INSURANCE", "032-07A-016(B)"),
    ("SX12", "SEX ABUSE-CHILD LESS 12 YOA", "13A-006-069.1"),
    ("TRAK", "TRAFFICKING-METHAMPHETAMINE", "13A-012-231(11)"),
    ("FCDC", "FRAUD USE CREDIT/DEBIT CARD", "13A-009-014(B)"),
    ("TOD3", "THEFT/DECEPTION 3RD", "13A-008-004.1"),
    ("UAUV", "UNAUTHORIZED USE VEHICLE", "13A-008-011(A)"),
    ("T012", "FAIL STOP SIGN", "032-05A-112(B)"),
    ("FR3D", "FORGERY 3RD", "13A-009-003.1"),
    ("HCOM", "HARASSING COMMUNICATIONS", "13A-011-008(B)"),
    ("TP3D", "THEFT OF PROPERTY 3RD DEGREE", "13A-008-4.1"),
    ("VPCC", "POSS CONTROLLED SUBST BY FRAUD", "13A-012-212(A)"),
    ("FORF", "BOND FORF-FELONY", "- -BOND FORT"),
    ("CECE", "CHEM END CHILD-EXP/CTN CTR SUB", "026-015-003.2(A)"),
    ("UDCS", "UNLAW DISTRIB/FURN CONT SUBST", "13A-012-211"),
    ("PRO2", "PROMOTING PROSTITUTION 2ND", "13A-012-112"),
    ("MCS1", "UNLAW MANF CTN SUBS 1ST DEGREE", "13A-012-218"),
    ("ACHA", "AGGRAVATED CHILD ABUSE", "026-015-003.1(A)"),
    ("CECD", "CHEM END CHILD-DEATH", "026-015-003.2(A)"),
    ("T627", "LANE CHANGE W/O PROPER SIGNAL", "032-05A-133"),
    ("FTCS", "FACILITATE TRAVEL F/ CHILD SEX", "13A-006-125"),
    ("MCS2", "UNLAW MANF CTN SUBS 2ND DEGREE", "13A-012-217"),
    ("PRO3", "PROMOTING PROSTITUTION 3RD", "13A-012-113"),
    ("UAUM", "UNAUTHORIZED USE MOTOR VEHICLE", "032-008-081"),
    ("T527", "DUI-CONTROLLED SUBSTANCE", "032-05A-191(A)"),
    ("BRA3", "BURGLARY 3RD (UNOCCUPIED BLDG)", "13A-007-007(A)"),
    ("FMUR", "FELONY MURDER", "13A-006-002(A)"),
    ("MURR", "MURDER-RECKLESS", "13A-006-002(A)"),
    ("FPCC", "ILL POSSESS CREDIT/DEBIT CARD", "13A-009-014(A)"),
    ("PREC", "POSS/SELL PRECURSOR CHEMICALS", "020-002-190(B)"),
    ("STSA", "SEXUAL TORTURE/ABUSE", "13A-006-065.1"),
    ("T582", "EXPIRED LICENSE", "032-006-001(B)"),
    ("CM02", "MURDER CAPITAL-ROBBERY", "13A-005-040(A)"),
    ("VDR4", "PARAPHERNALIA - SELL/DELIVER", "13A-012-260(D)"),
    ("VAPP", "POSSESS MARIHUANA 1ST DEGREE", "13A-012-213(A)"),
    ("MAN1", "MANSLAUGHTER-RECKLESS", "13A-006-003(A)"),
    ("VDR1", "USE/POSSESS DRUG PARAPHERNALIA", "13A-012-260(C)"),
    ("T755", "NO/IMP TAG LIGHT", "032-005-240(C)"),
    ("TRAO", "TRAFFICKING-HEROIN", "13A-012-231(3)"),
    ("FORM", "BOND FORF-MISD", "- -BOND FORT"),
    ("SVIA", "SALVIA MISDEMEANOR POSSESSION", "13A-012-214.1"),
    ("TRAG", "TRAFFICKING-SYNTHETIC DRUGS", "13A-012-231(12)"),
    ("DSF1", "DISCHARGE GUN OCC BLDG/VEHICLE", "13A-011-061(B)"),
    ("MISC", "MISCELLANEOUS FILING", ""),
    ("BRA1", "BURGLARY 3RD - DWELLING", "13A-007-007(A)"),
    ("CEM1", "CHEMICAL ENDANGER MINOR", "026-015-3.2(A)"),
    ("CM04", "MURDER CAPITAL-BURGLARY", "13A-005-040(A)"),
    ("IPCD", "ILL POSSESS CREDIT/DEBIT CARD", "13A-009-014(A)"),
    ("T005", "UNDER INFLUENCE CONT. SUBSTANC", "032-05A-191(A)"),
    ("T525", "DUI: ANY SUB WHICH IMPAIRS", "032-05A-191(A)"),
    ("CM15", "MURDER CAPITAL-UNDER 14 YEARS", "13A-005-040(A)"),
    ("DUIF", "DUI - FELONY", "032-05A-191(A)"),
    ("T169", "SPEED/ 70+ MPH OR 65+ MPH", "032-05A-171(4)"),
    ("DUIM", "DUI - MISD", "032-05A-191(A)"),
    ("T718", "DUI: UNDER INFLU ALCOHOL", "032-05A-191(A)"),
    ("DVHF", "FELONY DV 3RD HARRASSMENT", "13A-006-132(D)"),
    ("TROP", "TRAFFICKING-OPIUM", "13A-012-231(3)"),
    ("CM10", "MURDER CAPITAL-TWO OR MORE PER", "13A-005-040(A)"),
    ("CM17", "MURDER CAPITAL-VEH FR OUTSIDE", "13A-005-040(A)"),
    ("CM01", "MURDER CAPITAL-KIDNAP", "13A-005-040(A)"),
    ("VDRU", "TRAFFICKING-MORPHINE", "13A-012-231(3)"),
    ("T770", "INOPERABLE BRAKE LIGHTS", "032-005-241(B)"),
    ("ACAL", "AGGRAVATED CHILD ABUSE < SIX", "025-015-03.1(B)"),
    ("VDRY", "TRAFFICKING-COCAINE", "13A-012-231(2)"),
    ("TRFT", "TRAFFICKING FENTANYL", "13A-012-231(13)"),
    ("FNLE", "GIVING FALSE NAME TO OFF", "13A-009-018.1"),
    ("RS3D", "REC STOLEN PROP 3RD", "13A-008-18.1"),
    ("T806", "NO DRIVERS LICENSE", "032-006-018(A)"),
    ("TOS3", "THEFT OF SERVICES 3RD", "13A-008-010.3"),
    ("TSIB", "TRAFFICKING STOLEN IDENTITIES", "13A-008-193(B)"),
    ("T011", "DRIVING WRONG SIDE HWY", "032-05A-080(A)"),
    ("VAPD", "POSSESS MARIHUANA 1ST DEGREE", "13A-012-213(A)"),
    ("T128", "NO TAG REGIS IN VEHICLE", "040-012-260(B)"),
    ("BHER", "BOND HEARING", ""),
    ("APPL", "CASE APPEALED ON", ""),
    ("MRDI", "MURDER - INTENTIONAL", "13A-006-002(A)"),
    ("UAUY", "UNAUTHORIZED USE VEHICLE", "13A-008-011(A)"),
    ("T019", "FAILURE TO DIM LIGHTS", "032-005-242(C)"),
    ("T006", "FAIL YIELD ROW", "032-05A-112(C)"),
    ("MAN2", "MANSLAUGHTER-INTENT, PASSION", "13A-006-003(A)"),
    ("CM18", "MURDER CAPITAL-FIRED FROM VEHI", "13A-005-040(A)"),
    ("NUSE", "NO USER PERMIT", "033-015-007(C)"),
    ("FBAP", "FRAUD BY AUTHORIZED PERSONS", "13A-009-014.1"),
    ("VDRO", "DRUG PARAPHERNALIA TO MINOR", "13A-012-260(E)"),
    ("CM16", "MURDER CAPITAL-DWELL FR OUTSID", "13A-005-040(A)"),
    ("EDCO", "ENDG WELFARE CHILD-OCCUPATION", "13A-013-006(A)"),
    ("T096", "MOVING TRAFFIC VIO", ""),
    ("THBV", "HOMICIDE BY VEHICLE", "032-05A-190.1"),
    ("ASTM", "ALCOHOL-SALE/PERMIT UNDER AGE", "028-03A-025(A)"),
    ("SAVI", "SALVIA FELONY POSSESSION", "13A-012-214.1"),
    ("DVFC", "FELONY DV CRIM MISCHIEF 2D/3D", "13A-006-132(D)"),
    ("T128", "NO TAG REGIS IN VEHICLE", "040-012-260(B)"),
    ("T071", "COMBINED INFLUENCE", "032-05A-191(A)"),
    ("CM07", "MURDER CAPITAL-FOR HIRE", "13A-005-040(A)"),
    ("TRBF", "TR-FORT.", ""),
    ("T813", "MOVE OVER LAW", "032-05A-058.2"),
    ("CM03", "MURDER CAPITAL-RAPE/SODOMY", "13A-005-040(A)"),
    ("TRMA", "TRAFFICKING-MARIJUANA", "13A-012-231(1)"),
    ("T783", "IMPEDING FLOW TRAFFIC", "032-05A-080(B)"),
    ("T091", "DUI", "032-05A-191(A)"),
    ("T072", "UNDER INFLU - ANY SUBSTANCE", "032-05A-191(A)"),
    ("TOS2", "THEFT OF SERVICES 2ND", "13A-008-010.2"),
    ("DV36", "FELONY DV CRIM MISCHIEF 2ND", "13A-006-132(D)"),
    ("DSF2", "DISCHARGE GUN UNOCC BLDG/VEH", "13A-011-061(C)"),
    ("CM08", "MURDER CAPITAL-SEXUAL ABUSE", "13A-005-040(A)"),
    ("DOG1", "DOG/CAT CRUELTY 1ST DEGREE", "13A-011-241(A)"),
    ("CEM3", "CHEMICAL ENDANGER MINOR/DEATH", "026-015-3.2(A)"),
    ("PACS", "PROHIBITED ACTS-MAIN BLD/DWL", "020-002-071(A)"),
    ("T097", "OTHER NON MOVING VIO", ""),
    ("VDR2", "DEL/SALE DRUG PARAPHERNALIA", "13A-012-260(E)"),
    ("BRA2", "BURGLARY 3RD - OCCUPIED BLDG", "13A-007-007(A)"),
    ("DVFC", "FELONY DV CRIM MISCHIEF 2D/3D", "13A-006-132(D)"),
    ("TS3D", "THEFT OF SERVICES 3RD DEGREE", "13A-008-010.25"),
    ("CODL", "CONTRIBUTING TO THE DELINQUENC", "012-015-111(A)"),
    ("HAR2", "HARASSMENT - THREAT", "13A-011-008(A)"),
    ("T506", "FAIL TO YIELD EMER VEHICLE", "032-05A-115(A)"),
    ("HGAR", "FAILURE TO COMPLY - GARBAGE", "022-027-003(A)"),
    ("TRCN", "TR-CONTEMPT", ""),
    ("T773", "IMP TAIL LIGHTS-TRAILER", "032-005-240(C)"),
    ("PCUR", "FAIL CPLY REPORTS-PRECUR CHEMS", "020-002-190(A)"),
    ("PPRE", "POSS OF PRE-CURSOR CHEMICALS", "020-002-181(D)"),
    ("T507", "FAIL TO YIELD RIGHT OF WAY", "032-05A-082(2)"),
    ("T081", "NO HDLGTS WHEN REQUIRED", "032-005-240(A)"),
    ("PARA", "FAILURE COMPLY PARK CONDITIONS", "220-005-013(2)"),
    ("MAAL", "ALCOHOL- MINOR/POSS/CONSUME", "028-03A-025(A)"),
    ("PCAB", "POSS/CONT ALCOHOL-STATE PARK", "220-005-016(4)"),
    ("DOG2", "DOG/CAT CRUELTY 2ND DEGREE", "13A-011-241(B)"),
    ("SFUF", "SETTING FIRE-UNCL FOREST/WOOD", "009-013-011(B)"),
    ("OSUA", "OMMISSION/MISREP SALE SECURITI", "008-006-017(A)"),
    ("OSUA", "OMMISSION/MISREP SALE SECURITI", "008-006-017(A)"),
    ("EPH7", "ILL PURCHASE EPHEDRINE-INDIVID", "020-002-190(C)"),
    ("POBM", "PORN INTENT TO DISSEMINATE", "13A-012-192(A)"),
    ("HWL2", "HUNT-W/O NONRESIDENT LICENSE", "009-011-051(C)"),
    ("FCPF", "FIREARM-PERSONS FORBIDDEN/POSS", "13A-011-072(A)"),
    ("HNRL", "HUNT-LEND RESIDENT LICENSE", "009-011-051(B)"),
    ("DVAF", "FELONY DV 3RD ASSAULT 3RD", "13A-006-132(D)"),
    ("CPFP", "PISTOL-CERTAIN PERSONS FORBIDD", "13A-011-072(A)"),
    ("VSMA", "UNLAWFUL DISTRIB MARIHUANA", "13A-012-211(A)"),
    ("CM09", "MURDER CAPITAL-ARSON", "13A-005-040(A)"),
    ("COMR", "COMM NOTIF ACT-SCHOOL/CHILD CR", "015-020-026(A)"),
    ("VDR5", "MANUFACTURE PARAPHERN/FIREARM", "13A-012-260(D)"),
    ("TH3D", "THEFT BY DECEPTION 3RD", "13A-008-04.1"),
    ("STG2", "AGGRAVATED STALKING 2ND DEGREE", "13A-006-091.1"),
    ("CM13", "MURDER CAPITAL-20YR PRIOR CON", "13A-005-040(A)"),
    ("CNAR", "COMM NOTIFICATION-DECLARATION", "015-020-022(A)"),
    ("VDR3", "DEL/SALE DRUG PARAPHERNALIA", "13A-012-260(E)"),
    ("SCEF", "SCHOOL EMPLOYEE SEXUAL CONTACT", "13A-006-082(A)"),
    ("CM06", "MURDER CAPITAL-LIFE SENTENCE", "13A-005-040(A)"),
    ("T632", "DUI FELONY", "032-05A-191(A)"),
    ("TRAA", "TRAFF/CONTR SUBSTANCE", "13A-012-231(12)"),
    ("CM13", "MURDER CAPITAL-20YR PRIOR CON", "13A-005-040(A)"),
    ("UUID", "UNAUTH USE ID #", "032-008-086(D)"),
    ("VIM2", "IMITATION DRUG DIST TO MONOR", "020-008-086(D)"),
    ("TRSC", "SCRAP METAL/FALSIFY STATEMENT", "032-008-087(S)(2)"),
    ("OFFP", "USE POSITION-PERSONAL GAIN", "036-025-005(A)"),
    ("TRAY", "TRAFFICKING-HYDROMORPHONE", "13A-012-231(5)"),
    ("COMF", "COMM NOTIF ACT-VICTIM/VIC FAMI", "015-020-026(B)"),
    ("SCR4", "ILLEGAL DISPOSAL/ SCRAP TIRES", "022-40A-19(A)(4)"),
    ("TRAT", "TRAFFICKING-3,4 METHYL AMPHETA", "13A-012-231(6)"),
    ("TLT3", "THEFT OF LOST PROPERTY 3RD", "13A-008-008.1"),
    ("AGSF", "AGGRAVATED SURVEILLANCE FELONY", "13A-011-32.1"),
    ("EPH8", "ILL PURCHASE EPHEDRINE-INDIVID", "020-002-190(C)(4)"),
    ("TER1", "TERRORISM", "13A-010-152(A)"),
    ("ECNF", "ERROR CORAM NOBIS - FELONY", ""),
    ("DVE3", "FELONY DV 3RD ONE PRIOR FELONY", "13A-006-132(E)"),
    ("CM19", "CAPITAL MURDER - PROTECT ORDER", "13A-005-040(19)"),
    ("PSMF", "OBSCENE MATERIAL- DIST/POSS", "13A-012-200.2(1)"),
    ("TPCS", "THEFT 2ND CONTROLLED SUBSTANCE", "13A-008-004(D)"),
    ("TRMF", "TRAFF CANNABIS-W/POSS FIREARM", "13A-012-231(13)"),
    ("CNVS", "COMM NOTIF-10 DAY VERIF SUBMIT", "015-020-024(B)"),
    ("UPID", "POSS CONTR SUBS INTENT DISTRIB", "13A-012-211(C)"),
    ("SCR6", "SCRAP METAL/FALSE INFO", "13A-008-031(D)"),
    ("COME", "COM NOTIF ACT-NONRESIDENT", "015-020-25.1"),
    ("TRAQ", "TRAFFICKING-LSD", "13A-012-231(9)"),
    ("CM05", "MURDER CAPITAL-LAW OFF/GUARD", "13A-005-040(A)(5)"),
    ("EAS1", "EXPLOITATION OF ASSETS 1ST", "038-009-007(G)"),
    ("FELO", "FELONY CASE", ""),
    ("CEM2", "CHEMICAL ENDANGER INJURY", "026-015-3.2(A)(2)"),
    ("TS2D", "THEFT OF SERVICES 2ND DEGREE", "13A-008-010.2"),
    ("DALE", "DISARMING LAW ENFORCEMENT", "13A-010-005.1"),
    ("CDMV", "UNAUTH USE MTR VEH - BY FORCE", "13A-008-011(A)(4)"),
    ("CM14", "MURDER CAPITAL-WITNESS", "13A-005-040(A)(14)"),
    ("VAUA", "UNEMPLOYMENT COMP-CLASS B FEL", "025-004-145(A)(1)A"),
    ("COMM", "COMM NOTIF ACT-MINOR RESIDENCE", "015-020-026(C)"),
    ("AAPC", "AIDS/ABETS PERSON COMMIT OFFEN", "13A-002-023(2)"),
    ("DVBF", "FELONY DV 3RD HARRASS COMMUNIC", "13A-006-132(D)"),
    ("TRAJ", "TRAFFICKING-AMPHETAMINE", "13A-012-231(10)"),
    ("DVMF", "FELONY DV 3RD MENACING", "13A-006-132(D)"),
    ("DV37", "FELONY DV CRIM MISCHIEF 3RD", "13A-006-132(D)"),
    ("ASL1", "ASSAULT 1ST DEGREE (DUI/BUI)", "13A-006-020(A)(5)"),
    ("BORK", "BOAT-RECKLESS OPER VESSEL", "033-005-070(A)"),
    ("T767", "IMPROPER LOAD-UNSECURED", "032-005-076(B)"),
    ("CNRR", "COMM NOTIF RESIDENCE REQ", "015-020-021(C)"),
    ("PMDH", "HUNT/FEED AREA", "220-002-011(8"),
    ("T043", "OVERWIDE TRUCK", "032-009-020(1"),
    ("LRAL", "PERMITTING LIVESTOCK TO RUN AT", "003-005-002(D)"),
    ("PUSF", "POSSESSING UNDERSIZE FISH", "220-003-030(2"),
    ("SADV", "BOAT-VESS W/O SAFETY DEV/LGHT", "033-005-022(A)"),
    ("TILU", "IMPROPER LOAD", "032-005-076(B)"),
    ("T592", "ALCOHOL-CONSUM/COMM VEH", "032-006-049.1"),
    ("T513", "DRIVE THRU BARRICADE", "023-005-002(B)"),
    ("FWPO", "FISHING W/O PERMISSION OWNER", "220-002-044(6"),
    ("VPRA", "VIO. PARENTAL RESPONSIBILTY AC", "016-028-012(A)"),
    ("FEED", "HUNT-AREA FEEDING TAKEN PLACE", "220-002-011(8"),
    ("T574", "SPILLING LOAD ON ROAD", "032-005-076(A)"),
    ("DOOM", "DISSEMINATE OBSCENE MATERIAL", "13A-012-200.3"),
    ("CLCI", "CHANGING LIC PLATE-CONCEAL ID", "032-008-086(E)"),
    ("CODT", "CONT TO TRUANCY", "012-015-013(A)"),
    ("CRAB", "POSS UNDERSIZED BLUE CRABS", "220-003-031(1"),
    ("STA2", "STALKING  2ND DEGREE", "13A-006-090.1"),
    ("NCOS", "NO CUT OFF SWITCH LANYARD", "033-005-051(C)"),
    ("T731", "HITCHHIKING", "032-05A-216(A)"),
    ("BOCK", "BOAT-CARELESS OPER VESSEL", "033-005-070(B)"),
    ("T031", "ONEWAY STREET", "032-05A-087(B)"),
    ("PLUG", "ILLEGAL ARMS - TURKEY HUNTING", "220-002-002(3"),
    ("HLAG", "HUNT W/O LICENSE (ALL GAME)", "009-011-051(A)"),
    ("CONT", "CONTEMPT OF COURT", "012-011-030"),
    ("T594", "BOATING UNDER THE INFLUENCE", "032-05A-191.3"),
    ("TREZ", "FAIL/YIELD EMERG VEHICLE", "032-05A-115(A)"),
    ("T515", "OVERSIZED LOAD LIMIT", "032-009-029(A)"),
    ("INSM", "OPER VEH W/O INSURANCE", "032-07A-016(1"),
    ("T802", "CAUSE/ALLOW LITTER-ROADWAY", "032-005-076(C)"),
    ("SESS", "SOLICIT SEX ACT WITH STUDENT", "13A-006-082(B)"),
    ("HAMV", "HUNT-BY AID MOTORIZED VESSEL", "220-002-011(1"),
    ("T505", "BLUE LIGHT LAW", "032-05A-115(C)"),
    ("TS4T", "THEFT OF SERVICES 4TH DEGREE", "13A-008-010.3"),
    ("WOSO", "NO/ATTACHED SHUT-OFF SWITCH", "033-005-072(A)"),
    ("T753", "IMP LIGHT COLORING", "032-005-242(G)"),
    ("SIGN", "BOAT-VIO. RESTRICTIVE SIGN", "220-006-019(4"),
    ("T588", "STOPPING ON HIGHWAY", "032-05A-136(A)"),
    ("BLIC", "BOATING W/O LICENSE/CERTIF", "033-005-052(A)"),
    ("T040", "OVERHEIGHT TRUCK", "032-009-020(2"),
    ("FIWO", "FISH-WO PERMISSION", "009-011-091(A)"),
    ("VIM3", "IMITATION DRUG POSSESSION", "020-002-143(C)"),
    ("HUFV", "HUNT-FROM VEHICLE", "220-002-011(1"),
    ("TMOV", "MOVE OVER/EMERGENCY VEHICLE", "032-05A-058.2"),
    ("SETO", "DIST OBSCENE MATERIAL/SCHOOL", "13A-006-082.1"),
    ("TMVV", "MOVE OVER LAW VIOLATIONS", "032-05A-058.2"),
    ("LIFE", "BOAT-VESSEL W/O LIFE PRE.", "220-006-011(1"),
    ("HWOL", "HUNT-W/O LICENSE", "009-011-051(A)"),
    ("T037", "MOTORCYCLE NO-HELMET", "032-05A-245(A)"),
    ("T622", "NO TAG - UTILITY TRAILER", "040-012-252(A)"),
    ("T523", "DUI 0.08 BAC OR ABOVE", "032-05A-191(A)1"),
    ("PRFC", "PT-RL F/CN", ""),
    ("SHOW", "SHOW CAUSE DKT/HEARING", ""),
    ("VAUC", "UNEMPLOYMENT COMP-VIOLATION", "025-004-145(A)(1)C"),
    ("MAND", "WIRT OF MANDAMUS", ""),
    ("PCON", "PISTOL-CERTAIN PERSONS FORBIDD", "13A-011-072(B)"),
    ("NBTR", "NO ANT BUCK/TURKEY HAR RECORD", "220-002-146(2)"),
    ("UAUX", "UNAUTHORIZED USE VEHICLE", "13A-008-011(A)2"),
    ("T799", "PEDESTRIAN-SOL EMPLY/BUSN/CONT", "032-05A-216(B)"),
    ("TID1", "IGNITION INTERLOCK MISDEMEANOR", "032-05A-191.4(J)"),
    ("T827", "FAIL UPDATE DL NAME/ADDRESS", "760-X-1-07(7)"),
    ("PDPM", "DISTRIB HARMFUL MATERIAL-MINOR", "13A-012-200.5(1)"),
    ("CONS", "CONSERVATION", ""),
    ("SCFA", "SCIRE FACI", ""),
    ("T116", "CMV W/O PROPER DOCUMENTS", ""),
    ("T178", "DUI .08 OR MORE", "032-05A-191(A)1"),
    ("TRFM", "TRAFFIC/MISC", ""),
    ("TID2", "IGNITION INTERLOCK VIOLATIONS", "032-05A-191.4(L)"),
    ("FORT", "FORFEITURE-TRAFFIC", "- -BOND FORT"),
    ("T8LR", "CAUSE/ALLOW LITTER ON ROADWAY", "032-005-076(C)(1)"),
    ("PAUL", "ALCOHOL-POSS UNTAXED LIQ", "028-04-020"),
    ("DUIT", "DUI TRIAL DOCKET", ""),
    ("T309", "FAIL TO STOP AS REQUIRED", ""),
    ("TOWS", "BOAT-SKING W/O MIRROR\\OBSERVER", "033-005-026(A)"),
    ("TZ67", "CZ SLOWING/STOP W/O PROPER SIG", "032-05A-133(C)"),
    ("APAA", "ALCOHOL - ON PUBLIC ACCESS AREA", "220-002-037(13)"),
    ("BWNP", "BURN W/OUT NECESSARY PRECAUTIO", "009-013-011(B)(2)"),
    ("OFFM", "USE OFF POSITION- PERSONAL GAIN", "036-025-005(A)"),
    ("UCR1", "UNIFIED CARRIER REGISTRATION", "PSC-3.2-016"),
    ("WAUB", "WHLSE SALE ALCOHOL UNA BUYER", "028-03A-025(A)(2)"),
    ("TSTD", "KNOWINGLY TRANSMIT EXPOSE STD", "022-11A-021(C)"),
    ("ASPC", "ASPC-OTHER", ""),
    ("APRE", "ALCOHOL-ON OFF PREMISES LI", "028-03A-025(A)(4)"),
    ("SWOL", "ALCOHOL-SELL W/O LICENSE", "028-03A-025(A)(14)"),
    ("T082", "FAILURE TO DIM HEADLIGHTS", "032-005-242(C)(2)"),
    ("MSTR", "NO MASTER PLUMBER CERTIFICATE", "034-037-001(8)"),
    ("VSEX", "VIOLATION COMMUNITY NOT ACT", ""),
    ("MSDE", "MISDEMEANOR", ""),
    ("VAPR", "VIOL POSTED RULE-WILDLIFE AREA", "220-002-055(1)(BB)"),
    ("TRWL", "WASH SHRIMP TRAWL- CLOSED AREA", "220-003-001(5)"),
    ("VLAT", "VIOLATION", ""),
    ("OVES", "OPER VESSEL W/O EMERG SHUTOFF", "033-005-072(B)"),
    ("TLEF", "INTERSTATE/LEFT LANE 1.5 MILES", "032-05A-080(D)(1)"),
    ("EPH5", "SINGLE SALE-EPHEDRINE PRODUCT", "020-002-190(C)(2)"),
    ("AGSR", "AGGRAVATED SURVEILLANCE MISD", "13A-011-32.1"),
    ("PLFV", "HUNT-POSS LOAD GUN IN VEH", "220-002-055(1)(K)"),
    ("STAA", "STALKING AGGRAVATED 1ST DEGREE", "13A-006-091"),
    ("T591", "HANDICAPPED PARKING VIOLATION", "032-006-233.1"),
    ("ROB1", "ROBBERY 1ST", "13A-008-041"),
    ("TECH", "TECH VIOL PROBATION", "015-022-054.1"),
    ("PERT", "UNLAW SALE TOBACCO W/O PERMIT", "028-011-008"),
    ("PAGR", "ALCOHOL-POSS MORE THAN 5 GAL.", "028-004-115"),
    ("MCSD", "WRONG1MANF CTN SUBS 1ST DEGREE", "13A-012-218"),
    ("EPHM", "DRUG OFFENDER EPHEDRINE MISD", "020-002-190.2(K)"),
    ("T590", "FAIL TO STOP EXIT PARKING LOT", "032-05A-153"),
    ("EPHK", "SALE EPHEDRINE 2ND CONVICTION", "020-002-190.2(K)"),
];

/// Backfill values for `code`, if the code book has a row for it.
/// Later rows shadow earlier ones.
pub fn lookup(code: &str) -> Option<(&'static str, &'static str)> {
    FILLERS
        .iter()
        .rev()
        .find(|(c, _, _)| *c == code)
        .map(|(_, d, c)| (*d, *c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_backfills_description_and_cite() {
        assert_eq!(
            lookup("UPCS"),
            Some(("POSS. CONTR. SUBS", "13A-012-212(A)"))
        );
    }

    #[test]
    fn unknown_code_is_untouched() {
        assert_eq!(lookup("ZZZZ"), None);
    }

    #[test]
    fn duplicated_code_takes_last_row() {
        // A few codes are listed twice in the code book.
        assert_eq!(
            lookup("T128"),
            Some(("NO TAG REGIS IN VEHICLE", "040-012-260(B)"))
        );
    }
}
